use std::fmt;
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use tracing::trace;

use super::state::{ParseResult, Parser};

type ParserFn<T> = Arc<dyn for<'a> Fn(&'a str) -> ParseResult<'a, T> + Send + Sync>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<F>(parser: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a, T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }

    pub fn from_parser<P: Parser<T> + Send + Sync + 'static>(parser: P) -> Self {
        BoxedParser::new(move |input| parser.parse(input))
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        (self.parser)(input)
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

/// Anything a combinator accepts in place of a parser: a built parser, or a
/// [`super::Rule`] that is only filled in later.
pub trait IntoParser<T> {
    fn into_parser(self) -> BoxedParser<T>;
}

impl<T> IntoParser<T> for BoxedParser<T> {
    fn into_parser(self) -> BoxedParser<T> {
        self
    }
}

impl<T> IntoParser<T> for &BoxedParser<T> {
    fn into_parser(self) -> BoxedParser<T> {
        self.clone()
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Replace the failure message with `"<name> expected but <found> found."`
    pub fn label(self, name: impl Into<String>) -> BoxedParser<T> {
        let name = name.into();
        BoxedParser::new(move |input| match self.parse(input) {
            ParseResult::Failure { tokens, rest, .. } => {
                let found = rest
                    .chars()
                    .next()
                    .map_or_else(|| "end of input".to_string(), String::from);
                ParseResult::failure(format!("{name} expected but {found} found."), tokens, rest)
            }
            success => success,
        })
    }

    /// Only succeed when every character of the input was consumed.
    pub fn complete(self) -> BoxedParser<T> {
        BoxedParser::new(move |input| match self.parse(input) {
            ParseResult::Success { tokens, rest, .. } if !rest.is_empty() => ParseResult::failure(
                format!("end of input expected but {rest} found."),
                tokens,
                rest,
            ),
            result => result,
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence
impl<T: 'static, R: IntoParser<T>> Add<R> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn add(self, rhs: R) -> Self::Output {
        seq(self, rhs)
    }
}

/// `-` for keep left: A - B keeps only the first token
impl<T: 'static, R: IntoParser<T>> Sub<R> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: R) -> Self::Output {
        seq_left(self, rhs)
    }
}

/// `*` for keep right: A * B drops the first token
impl<T: 'static, R: IntoParser<T>> Mul<R> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn mul(self, rhs: R) -> Self::Output {
        seq_right(self, rhs)
    }
}

/// `|` for choice
impl<T: 'static, R: IntoParser<T>> BitOr<R> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: R) -> Self::Output {
        choice(self, rhs)
    }
}

/// `>>` for transform
impl<T: 'static, F> Shr<F> for BoxedParser<T>
where
    F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
{
    type Output = BoxedParser<T>;

    fn shr(self, f: F) -> Self::Output {
        transform(self, f)
    }
}

// === Primitive Parsers ===

/// Match one element of the input with a grammar supplied matcher.
///
/// The matcher receives `kind` and the remaining input and returns the token plus the
/// unconsumed input, or the token it found instead. A mismatch becomes a failure with the
/// message `"<kind> expected but <found> found."` that leaves the input untouched.
pub fn elem<T, M>(kind: impl Into<String>, matcher: M) -> BoxedParser<T>
where
    T: fmt::Display + 'static,
    M: for<'a> Fn(&str, &'a str) -> Result<(T, &'a str), T> + Send + Sync + 'static,
{
    let kind = kind.into();
    BoxedParser::new(move |input| match matcher(kind.as_str(), input) {
        Ok((token, rest)) => {
            let accepted = token.to_string();
            trace!(kind = %kind, accepted = %accepted, "matched");
            ParseResult::success(accepted, vec![token], rest)
        }
        Err(found) => {
            let shown = found.to_string();
            let shown = if shown.is_empty() {
                "end of input".to_string()
            } else {
                shown
            };
            trace!(kind = %kind, found = %shown, "mismatch");
            ParseResult::failure(format!("{kind} expected but {shown} found."), vec![found], input)
        }
    })
}

/// Run `p`, then `q` on whatever `p` left over.
pub fn seq<T: 'static>(p: impl IntoParser<T>, q: impl IntoParser<T>) -> BoxedParser<T> {
    let (p, q) = (p.into_parser(), q.into_parser());
    BoxedParser::new(move |input| match p.parse(input) {
        ParseResult::Success {
            accepted,
            mut tokens,
            rest,
        } => match q.parse(rest) {
            ParseResult::Success {
                accepted: more,
                tokens: tail,
                rest,
            } => {
                tokens.extend(tail);
                ParseResult::success(accepted + &more, tokens, rest)
            }
            failure => failure,
        },
        failure => failure,
    })
}

/// Ordered choice: `q` is only tried, on the original input, when `p` fails.
pub fn choice<T: 'static>(p: impl IntoParser<T>, q: impl IntoParser<T>) -> BoxedParser<T> {
    let (p, q) = (p.into_parser(), q.into_parser());
    BoxedParser::new(move |input| match p.parse(input) {
        ParseResult::Failure { .. } => q.parse(input),
        success => success,
    })
}

/// Rewrite the tokens of a successful parse.
pub fn transform<T: 'static, F>(p: impl IntoParser<T>, f: F) -> BoxedParser<T>
where
    F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
{
    let p = p.into_parser();
    BoxedParser::new(move |input| match p.parse(input) {
        ParseResult::Success {
            accepted,
            tokens,
            rest,
        } => ParseResult::success(accepted, f(tokens), rest),
        failure => failure,
    })
}

pub fn seq_left<T: 'static>(p: impl IntoParser<T>, q: impl IntoParser<T>) -> BoxedParser<T> {
    transform(seq(p, q), |mut tokens| {
        tokens.truncate(1);
        tokens
    })
}

pub fn seq_right<T: 'static>(p: impl IntoParser<T>, q: impl IntoParser<T>) -> BoxedParser<T> {
    transform(seq(p, q), |tokens| tokens.into_iter().skip(1).collect())
}

/// Always succeeds without consuming anything.
pub fn succeed<T: 'static>() -> BoxedParser<T> {
    BoxedParser::new(|input| ParseResult::success(String::new(), Vec::new(), input))
}

/// Always fails without consuming anything.
pub fn fail<T: 'static>() -> BoxedParser<T> {
    BoxedParser::new(|input| ParseResult::failure("unconditional failure", Vec::new(), input))
}

/// Optional: parse zero or one
pub fn opt<T: 'static>(p: impl IntoParser<T>) -> BoxedParser<T> {
    choice(p, succeed())
}

/// Parse zero or more occurrences
///
/// Stops at the first failure of `p`, which is never reported. A success that consumes
/// nothing also ends the loop and its tokens are dropped.
pub fn rep<T: 'static>(p: impl IntoParser<T>) -> BoxedParser<T> {
    let p = p.into_parser();
    BoxedParser::new(move |input| {
        let mut accepted = String::new();
        let mut tokens = Vec::new();
        let mut rest = input;

        loop {
            match p.parse(rest) {
                ParseResult::Success {
                    accepted: more,
                    tokens: found,
                    rest: next,
                } if next.len() < rest.len() => {
                    accepted.push_str(&more);
                    tokens.extend(found);
                    rest = next;
                }
                _ => break,
            }
        }

        ParseResult::success(accepted, tokens, rest)
    })
}

/// One or more `p` separated by `q`; separator tokens are dropped.
pub fn rep_sep<T: 'static>(p: impl IntoParser<T>, q: impl IntoParser<T>) -> BoxedParser<T> {
    let p = p.into_parser();
    seq(p.clone(), rep(seq_right(q, p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit<'a>(_kind: &str, input: &'a str) -> Result<(char, &'a str), char> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => Ok((c, chars.as_str())),
            Some(c) => Err(c),
            None => Err(' '),
        }
    }

    #[test]
    fn test_elem_matches_single_token() {
        let result = elem("Digit", digit).parse("7x");
        assert_eq!(result, ParseResult::success("7", vec!['7'], "x"));
    }

    #[test]
    fn test_elem_failure_keeps_input() {
        let result = elem("Digit", digit).parse("x7");
        assert_eq!(
            result,
            ParseResult::failure("Digit expected but x found.", vec!['x'], "x7")
        );
    }

    #[test]
    fn test_rep_stops_on_non_consuming_success() {
        let result = rep(opt(elem("Digit", digit))).parse("12ab");
        assert_eq!(result, ParseResult::success("12", vec!['1', '2'], "ab"));
    }

    #[test]
    fn test_rep_handles_long_input() {
        let input = "1".repeat(100_000);
        let result = rep(elem("Digit", digit)).parse(&input);
        assert_eq!(result.tokens().len(), 100_000);
        assert_eq!(result.rest(), "");
    }

    #[test]
    fn test_fail_is_non_consuming() {
        let result = fail::<char>().parse("abc");
        assert!(result.is_failure());
        assert_eq!(result.rest(), "abc");
        assert!(result.tokens().is_empty());
    }

    #[test]
    fn test_label_rewrites_message() {
        let parser = elem("Digit", digit).label("number");
        assert_eq!(
            parser.parse("?").message(),
            Some("number expected but ? found.")
        );
        assert_eq!(
            parser.parse("").message(),
            Some("number expected but end of input found.")
        );
    }
}
