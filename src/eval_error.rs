use crate::lexing::{LexError, Span};
use crate::line_and_col_indexer::LineAndColIndexer;
use colored::Colorize;
use std::error;
use std::fmt;
use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unknown symbol '{symbol}'")]
    UnknownSymbol { symbol: char },
    #[error("cannot have an operator before a closing parenthesis")]
    OperatorBeforeCloseParen,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("cannot have two operators side by side")]
    AdjacentOperators,
    #[error("cannot have an operator after an opening parenthesis")]
    OperatorAfterOpenParen,
    #[error("expression cannot start with an operator")]
    LeadingOperator,
    #[error("expression cannot end with an operator")]
    TrailingOperator,
    #[error("missing operator between two operands")]
    MissingOperator,
    #[error("empty parentheses")]
    EmptyParens,
    #[error("empty expression")]
    EmptyExpression,
}

/// An error, together with where in the input it occurred. The span is `None` when the error is
/// certain but has no single location, like an opening parenthesis that is never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

/// An [`EvalError`] displayed against the source text it came from, with the offending text
/// underlined.
#[derive(Debug, Clone)]
pub struct Report<'e, 's> {
    error: &'e EvalError,
    source: &'s str,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Option<Span>) -> EvalError {
        EvalError { kind, span }
    }

    /// Start offset, or `-1` if the error has no position.
    pub fn start(&self) -> isize {
        self.span.map(|(start, _)| start as isize).unwrap_or(-1)
    }

    /// End offset, or `-1` if the error has no position.
    pub fn end(&self) -> isize {
        self.span.map(|(_, end)| end as isize).unwrap_or(-1)
    }

    pub fn report<'e, 's>(&'e self, source: &'s str) -> Report<'e, 's> {
        Report {
            error: self,
            source,
        }
    }
}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> EvalError {
        let kind = match error {
            LexError::UnknownSymbol { symbol, .. } => EvalErrorKind::UnknownSymbol { symbol },
        };
        EvalError::new(kind, Some(error.span()))
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.span {
            Some((start, end)) => write!(f, "{} in position ({}, {})", self.kind, start, end),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl error::Error for EvalError {}

impl<'e, 's> fmt::Display for Report<'e, 's> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}: {}", "Error".red().bold(), self.error.kind)?;
        let (start, end) = match self.error.span {
            Some(span) => span,
            None => return Ok(()),
        };
        // Every span covers a single token, and whitespace is never a token, so it ends on the
        // line it starts on.
        let indexer = LineAndColIndexer::new(self.source);
        let (line_num, col) = indexer.line_col(start);
        let line = indexer.line_contents(line_num);
        writeln!(f, "At line {} column {}.", line_num, col)?;
        writeln!(f)?;
        writeln!(f, "{}", line)?;
        // Column offsets are in bytes; the carets are placed by character.
        let indent = line[..col].chars().count();
        let underlined = self.source[start..end].chars().count();
        let carets = "^".repeat(underlined.max(1));
        write!(f, "{}{}", " ".repeat(indent), carets.red())
    }
}
