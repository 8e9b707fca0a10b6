use thiserror::Error;

/// Mistakes made while assembling a grammar.
///
/// These are configuration errors, reported while the grammar is built. They are never
/// produced by parsing input; a parse that does not match is a [`super::ParseResult::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("rule `{rule}` is referenced but was never defined")]
    Undefined { rule: String },
    #[error("rule `{rule}` was already defined")]
    Redefined { rule: String },
}
