//! The combinator engine.
//!
//! A parser is anything implementing [`Parser`]: it takes the remaining input and returns a
//! [`ParseResult`]. Grammars are assembled from the combinators in this module, either as
//! free functions ([`seq`], [`choice`], [`rep`], ...) or with the operators implemented on
//! [`BoxedParser`]:
//!
//! | operator  | combinator    |
//! |-----------|---------------|
//! | `p + q`   | [`seq`]       |
//! | `p - q`   | [`seq_left`]  |
//! | `p * q`   | [`seq_right`] |
//! | `p \| q`  | [`choice`]    |
//! | `p >> f`  | [`transform`] |
//!
//! Recursive grammars name their rules up front with [`Rule`] and define them afterwards.

mod combinators;
mod error;
mod rule;
mod state;

pub use combinators::*;
pub use error::GrammarError;
pub use rule::Rule;
pub use state::{ParseResult, Parser};
