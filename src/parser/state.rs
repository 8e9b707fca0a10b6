use std::fmt;

/// Outcome of running a parser against some input.
///
/// `rest` always borrows from the input handed to the parser. On success it is the
/// unconsumed suffix; on failure it is, by convention, the input at the point where the
/// failing parser was tried, so that an enclosing choice can retry the same input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<'a, T> {
    Success {
        accepted: String,
        tokens: Vec<T>,
        rest: &'a str,
    },
    Failure {
        message: String,
        tokens: Vec<T>,
        rest: &'a str,
    },
}

impl<'a, T> ParseResult<'a, T> {
    pub fn success(accepted: impl Into<String>, tokens: Vec<T>, rest: &'a str) -> Self {
        ParseResult::Success {
            accepted: accepted.into(),
            tokens,
            rest,
        }
    }

    pub fn failure(message: impl Into<String>, tokens: Vec<T>, rest: &'a str) -> Self {
        ParseResult::Failure {
            message: message.into(),
            tokens,
            rest,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn tokens(&self) -> &[T] {
        match self {
            ParseResult::Success { tokens, .. } | ParseResult::Failure { tokens, .. } => tokens,
        }
    }

    pub fn into_tokens(self) -> Vec<T> {
        match self {
            ParseResult::Success { tokens, .. } | ParseResult::Failure { tokens, .. } => tokens,
        }
    }

    pub fn rest(&self) -> &'a str {
        match self {
            ParseResult::Success { rest, .. } | ParseResult::Failure { rest, .. } => rest,
        }
    }

    /// Reconstruction of the consumed input, only present on success.
    pub fn accepted(&self) -> Option<&str> {
        match self {
            ParseResult::Success { accepted, .. } => Some(accepted),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { message, .. } => Some(message),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ParseResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self
            .tokens()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        match self {
            ParseResult::Success { accepted, rest, .. } => write!(
                f,
                "[Parse Success] accepted:{accepted}, result:[{tokens}], rest:{rest}"
            ),
            ParseResult::Failure { message, rest, .. } => write!(
                f,
                "[Parse Failure] message:{message}, result:[{tokens}], rest:{rest}"
            ),
        }
    }
}

pub trait Parser<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T>;
}

// Allow closures to be parsers
impl<T, F> Parser<T> for F
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a, T>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        self(input)
    }
}
