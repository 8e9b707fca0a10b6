use std::fmt;

use super::error::ArithmeticError;

/// Tokens flowing through the arithmetic grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal such as an operator or a parenthesis.
    Symbol(String),
    Int(i64),
    /// An operation still waiting for its left operand.
    Apply(Step),
    /// A value poisoned by a failed operation.
    Fault(ArithmeticError),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Symbol(symbol) => f.write_str(symbol),
            Token::Int(value) => write!(f, "{value}"),
            Token::Apply(step) => write!(f, "{step}"),
            Token::Fault(error) => write!(f, "<{error}>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Checked integer arithmetic; division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        match self {
            Operator::Add => lhs.checked_add(rhs).ok_or(ArithmeticError::Overflow),
            Operator::Sub => lhs.checked_sub(rhs).ok_or(ArithmeticError::Overflow),
            Operator::Mul => lhs.checked_mul(rhs).ok_or(ArithmeticError::Overflow),
            Operator::Div if rhs == 0 => Err(ArithmeticError::DivisionByZero),
            Operator::Div => lhs.checked_div(rhs).ok_or(ArithmeticError::Overflow),
        }
    }
}

/// The right half of a binary operation, applied later to the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub operator: Operator,
    pub operand: i64,
}

impl Step {
    pub fn new(operator: Operator, operand: i64) -> Self {
        Step { operator, operand }
    }

    pub fn apply(self, total: i64) -> Result<i64, ArithmeticError> {
        self.operator.apply(total, self.operand)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator.symbol(), self.operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Operator::Div.apply(7, 2), Ok(3));
        assert_eq!(Operator::Div.apply(-7, 2), Ok(-3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Div.apply(3, 0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            Operator::Mul.apply(i64::MAX, 2),
            Err(ArithmeticError::Overflow)
        );
        assert_eq!(
            Operator::Div.apply(i64::MIN, -1),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_step_applies_to_running_total() {
        let step = Step::new(Operator::Sub, 4);
        assert_eq!(step.apply(10), Ok(6));
        assert_eq!(step.to_string(), "-4");
    }

    #[test]
    fn test_symbol_round_trip() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("%"), None);
    }
}
