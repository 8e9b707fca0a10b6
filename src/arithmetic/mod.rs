//! Integer arithmetic built from the combinators in [`crate::parser`].
//!
//! ```text
//! expr   := term (("+" | "-") term)*
//! term   := factor (("*" | "/") factor)*
//! factor := Number | "(" expr ")"
//! ```
//!
//! Every `(operator, operand)` pair is turned into a [`Token::Apply`] step and the steps
//! of one precedence level are folded left to right onto the first operand, so the
//! successful parse of a whole expression carries exactly one [`Token::Int`].
//!
//! Failing arithmetic (division by zero, overflow) does not fail the parse. It produces a
//! [`Token::Fault`] that absorbs the rest of the fold and is reported by [`evaluate`].

mod error;
pub mod lexemes;
mod token;

pub use error::{ArithmeticError, EvalError};
pub use token::{Operator, Step, Token};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::parser::{BoxedParser, GrammarError, ParseResult, Parser, Rule, elem, rep};

static GRAMMAR: Lazy<BoxedParser<Token>> =
    Lazy::new(|| grammar().expect("arithmetic grammar defines all of its rules"));

/// Build the `expr` parser.
pub fn grammar() -> Result<BoxedParser<Token>, GrammarError> {
    let expr = Rule::new("expr");
    let term = Rule::new("term");
    let factor = Rule::new("factor");

    let symbol = |kind: &str| elem(kind, lexemes::literal);
    let number = elem("Number", lexemes::number);

    expr.define(
        (term.parser() + rep(((symbol("+") + &term) >> step) | ((symbol("-") + &term) >> step)))
            >> fold,
    )?;

    term.define(
        (factor.parser()
            + rep(((symbol("*") + &factor) >> step) | ((symbol("/") + &factor) >> step)))
            >> fold,
    )?;

    // "(" expr ")" keeps only the value of expr
    factor.define(number | ((symbol("(") * &expr) - symbol(")")))?;

    for rule in [&expr, &term, &factor] {
        rule.ensure_defined()?;
    }

    Ok(expr.parser())
}

/// Parse `input` with the shared arithmetic grammar. Trailing input is left in `rest`.
pub fn parse(input: &str) -> ParseResult<'_, Token> {
    GRAMMAR.parse(input)
}

/// Parse the whole of `input` and return its value.
pub fn evaluate(input: &str) -> Result<i64, EvalError> {
    let result = parse(input);
    debug!(input, %result, "evaluated");

    match result {
        ParseResult::Failure { message, .. } => Err(EvalError::Parse { message }),
        ParseResult::Success { rest, .. } if !rest.is_empty() => Err(EvalError::Incomplete {
            rest: rest.to_string(),
        }),
        ParseResult::Success { tokens, .. } => match tokens.as_slice() {
            [Token::Int(value)] => Ok(*value),
            [Token::Fault(error)] => Err(EvalError::Arithmetic(*error)),
            _ => Err(EvalError::Malformed),
        },
    }
}

/// `[operator, operand]` -> `[Apply(step)]`
fn step(tokens: Vec<Token>) -> Vec<Token> {
    match tokens.as_slice() {
        [Token::Symbol(symbol), Token::Int(operand)] => match Operator::from_symbol(symbol) {
            Some(operator) => vec![Token::Apply(Step::new(operator, *operand))],
            None => tokens,
        },
        [Token::Symbol(_), Token::Fault(error)] => vec![Token::Fault(*error)],
        _ => tokens,
    }
}

/// `[first, Apply(step)...]` -> `[total]`
fn fold(tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens = tokens.into_iter();
    let Some(first) = tokens.next() else {
        return Vec::new();
    };

    let total = tokens.fold(first, |total, token| match (total, token) {
        (fault @ Token::Fault(_), _) => fault,
        (_, fault @ Token::Fault(_)) => fault,
        (Token::Int(value), Token::Apply(pending)) => {
            pending.apply(value).map_or_else(Token::Fault, Token::Int)
        }
        (total, _) => total,
    });

    vec![total]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_builds_pending_operation() {
        let tokens = vec![Token::Symbol("*".to_string()), Token::Int(3)];
        assert_eq!(
            step(tokens),
            vec![Token::Apply(Step::new(Operator::Mul, 3))]
        );
    }

    #[test]
    fn test_step_passes_fault_through() {
        let tokens = vec![
            Token::Symbol("+".to_string()),
            Token::Fault(ArithmeticError::DivisionByZero),
        ];
        assert_eq!(
            step(tokens),
            vec![Token::Fault(ArithmeticError::DivisionByZero)]
        );
    }

    #[test]
    fn test_fold_is_left_associative() {
        let tokens = vec![
            Token::Int(10),
            Token::Apply(Step::new(Operator::Sub, 3)),
            Token::Apply(Step::new(Operator::Sub, 2)),
        ];
        assert_eq!(fold(tokens), vec![Token::Int(5)]);
    }

    #[test]
    fn test_fold_stops_at_fault() {
        let tokens = vec![
            Token::Int(1),
            Token::Apply(Step::new(Operator::Div, 0)),
            Token::Apply(Step::new(Operator::Add, 2)),
        ];
        assert_eq!(
            fold(tokens),
            vec![Token::Fault(ArithmeticError::DivisionByZero)]
        );
    }

    #[test]
    fn test_fold_of_single_operand() {
        assert_eq!(fold(vec![Token::Int(4)]), vec![Token::Int(4)]);
    }
}
