use thiserror::Error;

/// Faults raised by integer arithmetic while folding an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

/// Why [`super::evaluate`] could not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("parse failed: {message}")]
    Parse { message: String },
    #[error("unexpected trailing input `{rest}`")]
    Incomplete { rest: String },
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("expression did not reduce to a single integer")]
    Malformed,
}
