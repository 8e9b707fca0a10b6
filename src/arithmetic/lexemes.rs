//! Match functions handed to [`crate::parser::elem`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::Token;

/// Decimal integers without leading zeros; `0` on its own is allowed.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:0|[1-9][0-9]*)").unwrap());

/// Match `kind` literally at the start of the input.
///
/// On a mismatch the returned token holds as many characters of the input as `kind` has,
/// fewer if the input is shorter.
pub fn literal<'a>(kind: &str, input: &'a str) -> Result<(Token, &'a str), Token> {
    match input.strip_prefix(kind) {
        Some(rest) => Ok((Token::Symbol(kind.to_string()), rest)),
        None => Err(Token::Symbol(
            input.chars().take(kind.chars().count()).collect(),
        )),
    }
}

/// Match a non-negative decimal integer.
pub fn number<'a>(_kind: &str, input: &'a str) -> Result<(Token, &'a str), Token> {
    let Some(found) = NUMBER.find(input) else {
        return Err(Token::Symbol(input.chars().take(1).collect()));
    };

    match found.as_str().parse::<i64>() {
        Ok(value) => Ok((Token::Int(value), &input[found.end()..])),
        Err(_) => Err(Token::Symbol(found.as_str().to_string())),
    }
}
