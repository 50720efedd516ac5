//! # Yardcalc
//!
//! Evaluate arithmetic expressions like `2*(3+4)^2-1`, or get back an error that says exactly
//! where the expression went wrong.
//!
//! ```
//! use yardcalc::{eval, EvalErrorKind};
//!
//! assert_eq!(eval("2*(3+4)^2-1").unwrap(), 97.0);
//!
//! let err = eval("1+)").unwrap_err();
//! assert_eq!(err.kind, EvalErrorKind::OperatorBeforeCloseParen);
//! assert_eq!(err.span, Some((2, 3)));
//! ```
//!
//! Evaluation happens in four stages, each in its own module:
//!
//! - [`lexing`] splits the text into lexemes, using a generic pattern-driven lexer.
//! - [`validation`] rejects malformed lexeme sequences.
//! - [`shunting`] builds an expression tree with the shunting yard algorithm.
//! - [`Expr::eval`] evaluates the tree.
//!
//! Supported are non-negative decimal numbers, `+ - * / ^`, and parentheses. All operators group
//! to the left, _including_ `^`, so `2^3^2` is `64`. A number directly before a parenthesis is
//! multiplied with it: `2(3+4)` is `14`.

mod eval_error;
pub mod lexing;
pub mod line_and_col_indexer;
pub mod shunting;
mod token;
pub mod validation;

use lexing::{lexeme_span, Lexeme, Lexer};
use std::sync::OnceLock;

pub use eval_error::{EvalError, EvalErrorKind, Report};
pub use lexing::Span;
pub use shunting::Expr;
pub use token::{arithmetic_lexer, Tok};

/// An arithmetic evaluator. Holds the lexer, so that it is only constructed once; there is no
/// other state, and a `Calculator` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Calculator {
    lexer: Lexer<Tok>,
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator {
            lexer: arithmetic_lexer(),
        }
    }

    /// Split `source` into lexemes, including whitespace.
    pub fn tokenize<'s>(&self, source: &'s str) -> Result<Vec<Lexeme<'s, Tok>>, EvalError> {
        let lexemes = self.lexer.lex(source).map_err(|err| {
            log::debug!("lexing failed: {}", err);
            EvalError::from(err)
        })?;
        log::trace!(
            "lexed: {}",
            lexemes
                .iter()
                .map(|lex| format!("{:?}({:?})", lex.token, lex.text))
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(lexemes)
    }

    /// Lex, validate, and build the expression tree for `source`, without evaluating it.
    pub fn parse(&self, source: &str) -> Result<Expr, EvalError> {
        let lexemes = self.tokenize(source)?;
        validation::validate(&lexemes).map_err(|violation| {
            let span = violation.index.map(|i| lexeme_span(&lexemes, i));
            let error = EvalError::new(violation.kind, span);
            log::debug!("validation failed: {}", error);
            error
        })?;
        let expr = shunting::build(&lexemes);
        log::trace!("built: {}", expr);
        Ok(expr)
    }

    /// Evaluate the arithmetic expression `source`.
    pub fn eval(&self, source: &str) -> Result<f64, EvalError> {
        let value = self.parse(source)?.eval();
        log::trace!("evaluated {:?} to {}", source, value);
        Ok(value)
    }
}

/// Evaluate the arithmetic expression `source`, using a shared [`Calculator`].
pub fn eval(source: &str) -> Result<f64, EvalError> {
    static CALCULATOR: OnceLock<Calculator> = OnceLock::new();
    CALCULATOR.get_or_init(Calculator::new).eval(source)
}
