//! Reject malformed lexeme sequences before building an expression tree, so that the builder can
//! assume its input is well formed.

use crate::eval_error::EvalErrorKind;
use crate::lexing::Lexeme;
use crate::token::Tok;

/// Why and where a lexeme sequence is malformed. `index` is the index of the offending lexeme, or
/// `None` if the problem is only detectable at the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub kind: EvalErrorKind,
    pub index: Option<usize>,
}

impl Violation {
    fn at(kind: EvalErrorKind, index: usize) -> Violation {
        Violation {
            kind,
            index: Some(index),
        }
    }

    fn at_end(kind: EvalErrorKind) -> Violation {
        Violation { kind, index: None }
    }
}

/// Check, in a single left-to-right pass, that `lexemes` form a well formed expression.
/// Whitespace is skipped over: "previous" always means the previous non-space lexeme.
pub fn validate(lexemes: &[Lexeme<Tok>]) -> Result<(), Violation> {
    use EvalErrorKind::*;

    let mut open_parens = 0usize;
    // (index, token) of the previous non-space lexeme
    let mut prev: Option<(usize, Tok)> = None;

    for (i, lexeme) in lexemes.iter().enumerate() {
        let token = lexeme.token;
        if token.is_space() {
            continue;
        }
        let prev_token = prev.map(|(_, tok)| tok);

        match token {
            Tok::LParen => {
                // `2(3)` is implicit multiplication, but `(1)(2)` is not
                if prev_token == Some(Tok::RParen) {
                    return Err(Violation::at(MissingOperator, i));
                }
                open_parens += 1;
            }
            Tok::RParen => {
                // 1+)
                if prev_token.map(Tok::is_operator).unwrap_or(false) {
                    return Err(Violation::at(OperatorBeforeCloseParen, i));
                }
                // (3))
                if open_parens == 0 {
                    return Err(Violation::at(UnbalancedParens, i));
                }
                // ()
                if prev_token == Some(Tok::LParen) {
                    return Err(Violation::at(EmptyParens, i));
                }
                open_parens -= 1;
            }
            Tok::Number => {
                // 2 3, (1)2
                if matches!(prev_token, Some(Tok::Number) | Some(Tok::RParen)) {
                    return Err(Violation::at(MissingOperator, i));
                }
            }
            _ => {
                debug_assert!(token.is_operator());
                // 3/*4
                if prev_token.map(Tok::is_operator).unwrap_or(false) {
                    return Err(Violation::at(AdjacentOperators, i));
                }
                // (+3
                if prev_token == Some(Tok::LParen) {
                    return Err(Violation::at(OperatorAfterOpenParen, i));
                }
                // *5
                if prev_token.is_none() {
                    return Err(Violation::at(LeadingOperator, i));
                }
            }
        }
        prev = Some((i, token));
    }

    // (5+4
    if open_parens != 0 {
        return Err(Violation::at_end(UnbalancedParens));
    }
    match prev {
        None => Err(Violation::at_end(EmptyExpression)),
        Some((i, token)) if token.is_operator() => Err(Violation::at(TrailingOperator, i)),
        Some(_) => Ok(()),
    }
}
