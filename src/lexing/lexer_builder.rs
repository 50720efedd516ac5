use super::lexer::Lexer;
use super::pattern::{Matcher, Pattern};
use super::Token;
use regex::Error as RegexError;
use thiserror::Error;

/// Construct a lexer.
pub struct LexerBuilder<T: Token> {
    patterns: Vec<PatternSpec<T>>,
}

enum PatternSpec<T: Token> {
    String(T, String),
    Regex(T, String),
    Matcher(T, Matcher),
}

/// Error while constructing a lexer.
#[derive(Debug, Clone, Error)]
pub enum LexerBuilderError {
    #[error(transparent)]
    InvalidRegex(#[from] RegexError),
}

impl<T: Token> Default for LexerBuilder<T> {
    fn default() -> LexerBuilder<T> {
        LexerBuilder::new()
    }
}

impl<T: Token> LexerBuilder<T> {
    /// Start building a [`Lexer`]. Patterns are tried in the order they are added, and the first
    /// one that matches wins. There is no implicit whitespace: if the source may contain
    /// whitespace, add a pattern (and token) for it.
    pub fn new() -> LexerBuilder<T> {
        LexerBuilder { patterns: vec![] }
    }

    /// Add a token that matches a literal string. Special regex characters are matched literally;
    /// you do not have to escape anything.
    pub fn string(&mut self, string: &str, token: T) -> &mut LexerBuilder<T> {
        self.patterns
            .push(PatternSpec::String(token, string.to_owned()));
        self
    }

    /// Add a token that matches a regex pattern. The regex syntax is that of the `regex` crate.
    /// It is anchored at the current position; matches of the empty string are ignored.
    pub fn regex(&mut self, regex: &str, token: T) -> &mut LexerBuilder<T> {
        self.patterns
            .push(PatternSpec::Regex(token, regex.to_owned()));
        self
    }

    /// Add a token that is recognized by a hand-written function.
    pub fn matcher(&mut self, matcher: Matcher, token: T) -> &mut LexerBuilder<T> {
        self.patterns.push(PatternSpec::Matcher(token, matcher));
        self
    }

    /// Finish the builder pattern, and construct the Lexer.
    pub fn build(&mut self) -> Result<Lexer<T>, LexerBuilderError> {
        let mut patterns = vec![];
        for spec in self.patterns.drain(..) {
            let pattern = match spec {
                PatternSpec::String(token, string) => Pattern::new_string(token, string),
                PatternSpec::Regex(token, regex) => Pattern::new_regex(token, &regex)?,
                PatternSpec::Matcher(token, matcher) => Pattern::new_matcher(token, matcher),
            };
            patterns.push(pattern);
        }
        log::trace!(
            "built lexer: {}",
            patterns
                .iter()
                .map(|pattern| pattern.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(Lexer::new(patterns))
    }
}
