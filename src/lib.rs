//! # tiny-parser - A Minimal Parser-Combinator Library
//!
//! tiny-parser lets a grammar be written as a composition of small parsers instead of a
//! hand-written recursive-descent parser. It ships with an integer arithmetic grammar built
//! entirely from those combinators.
//!
//! ## Architecture Overview
//!
//! The crate has two strictly layered parts:
//!
//! 1. **Engine** (`parser`) - the [`parser::Parser`] abstraction, the [`parser::ParseResult`]
//!    model and the combinators (sequence, choice, repetition, transform, elemental match)
//! 2. **Arithmetic grammar** (`arithmetic`) - a client of the engine that evaluates
//!    expressions such as `(1+2+3)*(4+5+6)`
//!
//! ## Result Model
//!
//! Running a parser yields either
//!
//! - `Success { accepted, tokens, rest }` - the consumed text, the tokens produced for it
//!   and the unconsumed input, or
//! - `Failure { message, tokens, rest }` - a diagnostic, the offending tokens and the input
//!   at the failure point.
//!
//! Failures never consume input, which is what lets [`parser::choice`] retry the same input
//! with its second alternative. A success that leaves input behind is still a success;
//! use [`parser::BoxedParser::complete`] to require full consumption.
//!
//! ## Recursive Grammars
//!
//! Rules that refer to themselves, directly or through other rules, are declared first as
//! a [`parser::Rule`] and defined once every parser that mentions them exists:
//!
//! ```text
//! expr   := term (("+" | "-") term)*
//! term   := factor (("*" | "/") factor)*
//! factor := Number | "(" expr ")"
//! ```
//!
//! ## Example
//!
//! ```
//! use tiny_parser::arithmetic::{self, Token};
//!
//! let result = arithmetic::parse("(1+2+3)*(4+5+6)");
//! assert_eq!(result.tokens(), &[Token::Int(90)]);
//! assert_eq!(result.rest(), "");
//!
//! assert_eq!(arithmetic::evaluate("2*3+4"), Ok(10));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - The combinator engine
//! - [`arithmetic`] - The arithmetic expression grammar

pub mod arithmetic;
pub mod parser;
