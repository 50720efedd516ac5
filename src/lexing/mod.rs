//! A small, table-driven lexer. It knows nothing about arithmetic: it is configured with an
//! ordered list of patterns, each tagged with a token, and tries them in order at every position.
//!
//! ```
//! use yardcalc::lexing::LexerBuilder;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Tok { Word, Bang, Space }
//!
//! let lexer = LexerBuilder::new()
//!     .regex("[a-z]+", Tok::Word)
//!     .string("!", Tok::Bang)
//!     .regex("[ ]+", Tok::Space)
//!     .build()
//!     .unwrap();
//!
//! let lexemes = lexer.lex("hi there!").unwrap();
//! let tokens = lexemes.iter().map(|lex| lex.token).collect::<Vec<_>>();
//! assert_eq!(tokens, vec![Tok::Word, Tok::Space, Tok::Word, Tok::Bang]);
//! ```

mod cursor;
mod lexer;
mod lexer_builder;
mod pattern;

use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

pub use cursor::Cursor;
pub use lexer::{Lex, Lexer};
pub use lexer_builder::{LexerBuilder, LexerBuilderError};
pub use pattern::{Matcher, Pattern};

/// A start and end byte offset into the source text. The start is inclusive, the end exclusive.
pub type Span = (usize, usize);

/// A category of lexeme, such as "NUMBER" or "OPEN_PAREN".
pub trait Token: Debug + Clone + Copy + PartialEq + Eq + Hash {}

impl<T: Debug + Clone + Copy + PartialEq + Eq + Hash> Token for T {}

/// One "word" in the stream returned by the lexer. Lexemes do not store their position: it can be
/// recovered with [`lexeme_span`], since the lexer never skips any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme<'s, T: Token> {
    pub token: T,
    pub text: &'s str,
}

/// The lexer found a character that no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown symbol '{symbol}'")]
    UnknownSymbol { symbol: char, offset: usize },
}

impl<'s, T: Token> Lexeme<'s, T> {
    pub fn new(token: T, text: &'s str) -> Lexeme<'s, T> {
        Lexeme { token, text }
    }
}

impl LexError {
    /// The offending character.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownSymbol { symbol, offset } => (*offset, offset + symbol.len_utf8()),
        }
    }
}

/// The span of the `index`th lexeme, computed by summing the lengths of the lexemes before it.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn lexeme_span<T: Token>(lexemes: &[Lexeme<T>], index: usize) -> Span {
    let start = lexemes[..index].iter().map(|lex| lex.text.len()).sum::<usize>();
    (start, start + lexemes[index].text.len())
}
