use super::{Cursor, Token};
use regex::{Error as RegexError, Regex};
use std::fmt;

/// A hand-written matcher. It should consume the text of one token from the cursor and return
/// `true`, or return `false` if the token is not present. There is no need to rewind on failure.
pub type Matcher = fn(&mut Cursor) -> bool;

/// How to recognize one kind of token.
#[derive(Debug, Clone)]
pub enum Pattern<T: Token> {
    String(T, String),
    Regex(T, Regex),
    Matcher(T, Matcher),
}

impl<T: Token> Pattern<T> {
    pub fn new_string(token: T, string: String) -> Pattern<T> {
        Pattern::String(token, string)
    }

    pub fn new_regex(token: T, regex_pattern: &str) -> Result<Pattern<T>, RegexError> {
        // Anchor it, so that it can only match at the cursor.
        let regex = Regex::new(&format!("^(?:{})", regex_pattern))?;
        Ok(Pattern::Regex(token, regex))
    }

    pub fn new_matcher(token: T, matcher: Matcher) -> Pattern<T> {
        Pattern::Matcher(token, matcher)
    }

    pub fn token(&self) -> T {
        match self {
            Pattern::String(token, _) | Pattern::Regex(token, _) | Pattern::Matcher(token, _) => {
                *token
            }
        }
    }

    /// Try to match at `cursor`, advancing it on success. On failure the cursor may have moved;
    /// callers pass in a fork.
    pub fn try_match(&self, cursor: &mut Cursor) -> bool {
        match self {
            Pattern::String(_, string) => cursor.eat_str(string),
            Pattern::Regex(_, regex) => cursor.eat_regex(regex),
            Pattern::Matcher(_, matcher) => matcher(cursor),
        }
    }
}

impl<T: Token> fmt::Display for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pattern::String(_, string) => write!(f, "\"{}\"", string.escape_default()),
            Pattern::Regex(_, regex) => write!(f, "/{}/", regex.as_str().escape_default()),
            Pattern::Matcher(token, _) => write!(f, "<{:?}>", token),
        }
    }
}
