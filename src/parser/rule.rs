use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::trace;

use super::combinators::{BoxedParser, IntoParser};
use super::error::GrammarError;
use super::state::{ParseResult, Parser};

/// A named grammar rule that can be referenced before it is defined.
///
/// Combinators capture a rule through [`Rule::parser`] (or by passing `&rule` wherever a
/// parser is accepted) and only look inside it while parsing. This is what makes recursive
/// rules like `expr -> term -> factor -> expr` expressible:
///
/// ```
/// use tiny_parser::parser::{BoxedParser, Parser, Rule, elem, opt};
///
/// fn literal<'a>(kind: &str, input: &'a str) -> Result<(String, &'a str), String> {
///     match input.strip_prefix(kind) {
///         Some(rest) => Ok((kind.to_string(), rest)),
///         None => Err(input.chars().take(1).collect()),
///     }
/// }
///
/// // nested := "(" nested? ")"
/// let nested = Rule::new("nested");
/// let open: BoxedParser<String> = elem("(", literal);
/// nested.define(open + opt(&nested) + elem(")", literal)).unwrap();
///
/// assert_eq!(nested.parse("(())").rest(), "");
/// ```
///
/// A rule is defined exactly once. Parsing through a rule that was never defined is a
/// grammar construction bug and panics; grammar builders should call
/// [`Rule::ensure_defined`] before handing a grammar out.
pub struct Rule<T> {
    name: Arc<str>,
    slot: Arc<OnceCell<BoxedParser<T>>>,
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Rule {
            name: Arc::clone(&self.name),
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: 'static> Rule<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Rule {
            name: Arc::from(name.into()),
            slot: Arc::new(OnceCell::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Fill the rule with its definition.
    pub fn define(&self, parser: impl IntoParser<T>) -> Result<(), GrammarError> {
        self.slot
            .set(parser.into_parser())
            .map_err(|_| GrammarError::Redefined {
                rule: self.name.to_string(),
            })
    }

    pub fn ensure_defined(&self) -> Result<(), GrammarError> {
        if self.is_defined() {
            Ok(())
        } else {
            Err(GrammarError::Undefined {
                rule: self.name.to_string(),
            })
        }
    }

    /// A parser that forwards to whatever the rule holds at parse time.
    pub fn parser(&self) -> BoxedParser<T> {
        let rule = self.clone();
        BoxedParser::new(move |input| rule.parse(input))
    }
}

impl<T> Parser<T> for Rule<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        let Some(parser) = self.slot.get() else {
            panic!("rule `{}` was used before it was defined", self.name);
        };
        trace!(rule = %self.name, "enter");
        parser.parse(input)
    }
}

impl<T: 'static> IntoParser<T> for Rule<T> {
    fn into_parser(self) -> BoxedParser<T> {
        self.parser()
    }
}

impl<T: 'static> IntoParser<T> for &Rule<T> {
    fn into_parser(self) -> BoxedParser<T> {
        self.parser()
    }
}
