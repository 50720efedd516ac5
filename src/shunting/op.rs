use crate::token::Tok;
use std::fmt;

/// Precedence level. Larger binds tighter.
pub type Prec = u16;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn from_token(token: Tok) -> Option<BinOp> {
        match token {
            Tok::Add => Some(BinOp::Add),
            Tok::Sub => Some(BinOp::Sub),
            Tok::Mul => Some(BinOp::Mul),
            Tok::Div => Some(BinOp::Div),
            Tok::Pow => Some(BinOp::Pow),
            _ => None,
        }
    }

    pub const fn prec(self) -> Prec {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 3,
        }
    }

    /// Apply the operator. Division by zero gives an infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
            BinOp::Pow => left.powf(right),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
