use crate::lexing::{Cursor, Lexer, Pattern};

/// The tokens of an arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tok {
    Number,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
    Space,
}

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

impl Tok {
    pub fn is_operator(self) -> bool {
        matches!(self, Tok::Add | Tok::Sub | Tok::Mul | Tok::Div | Tok::Pow)
    }

    pub fn is_space(self) -> bool {
        self == Tok::Space
    }
}

fn match_number(cursor: &mut Cursor) -> bool {
    cursor.eat_number()
}

fn match_space(cursor: &mut Cursor) -> bool {
    cursor.eat_any_of(WHITESPACE)
}

/// The lexer for arithmetic expressions: numbers, `+ - * / ^`, parentheses, and whitespace.
pub fn arithmetic_lexer() -> Lexer<Tok> {
    Lexer::new(vec![
        Pattern::new_matcher(Tok::Number, match_number),
        Pattern::new_string(Tok::Add, "+".to_owned()),
        Pattern::new_string(Tok::Sub, "-".to_owned()),
        Pattern::new_string(Tok::Mul, "*".to_owned()),
        Pattern::new_string(Tok::Div, "/".to_owned()),
        Pattern::new_string(Tok::Pow, "^".to_owned()),
        Pattern::new_string(Tok::LParen, "(".to_owned()),
        Pattern::new_string(Tok::RParen, ")".to_owned()),
        Pattern::new_matcher(Tok::Space, match_space),
    ])
}
