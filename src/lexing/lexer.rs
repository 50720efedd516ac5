use super::pattern::Pattern;
use super::{Cursor, LexError, Lexeme, Token};

/// A configured lexer. Construct one with [`LexerBuilder`](super::LexerBuilder). It is immutable,
/// so one lexer can be shared by any number of threads.
#[derive(Debug, Clone)]
pub struct Lexer<T: Token> {
    patterns: Vec<Pattern<T>>,
}

/// The lexeme stream of one source text. Produced by [`Lexer::lex_iter`]. Stops after the first
/// error.
#[derive(Debug, Clone)]
pub struct Lex<'l, 's, T: Token> {
    lexer: &'l Lexer<T>,
    cursor: Cursor<'s>,
    done: bool,
}

impl<T: Token> Lexer<T> {
    /// A lexer that tries `patterns` in order. Building from a [`Pattern`] list cannot fail; use
    /// [`LexerBuilder`](super::LexerBuilder) to have regexes compiled for you.
    pub fn new(patterns: Vec<Pattern<T>>) -> Lexer<T> {
        Lexer { patterns }
    }

    /// Split `source` into lexemes. Nothing is skipped: concatenating the text of the lexemes gives
    /// back `source`.
    pub fn lex<'s>(&self, source: &'s str) -> Result<Vec<Lexeme<'s, T>>, LexError> {
        self.lex_iter(source).collect()
    }

    pub fn lex_iter<'l, 's>(&'l self, source: &'s str) -> Lex<'l, 's, T> {
        Lex {
            lexer: self,
            cursor: Cursor::new(source),
            done: false,
        }
    }
}

impl<'l, 's, T: Token> Iterator for Lex<'l, 's, T> {
    type Item = Result<Lexeme<'s, T>, LexError>;

    fn next(&mut self) -> Option<Result<Lexeme<'s, T>, LexError>> {
        if self.done || self.cursor.is_at_end() {
            return None;
        }
        // Patterns are tried in order; the first one to match wins.
        for pattern in &self.lexer.patterns {
            let mut fork = self.cursor.fork();
            if pattern.try_match(&mut fork) && !fork.consumed().is_empty() {
                self.cursor.commit(fork);
                return Some(Ok(Lexeme::new(pattern.token(), fork.consumed())));
            }
        }
        // No pattern matched! Lex error!
        self.done = true;
        let offset = self.cursor.offset();
        let symbol = self.cursor.peek()?;
        Some(Err(LexError::UnknownSymbol { symbol, offset }))
    }
}
