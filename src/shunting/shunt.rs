use super::node::Expr;
use super::op::BinOp;
use super::op_stack::{OpStack, StackItem};
use crate::lexing::Lexeme;
use crate::token::Tok;

/// Build an expression tree from a sequence of lexemes, using the shunting yard algorithm.
/// Whitespace lexemes are skipped. A number directly followed by an open paren is multiplied with
/// it, so `2(3+4)` means `2*(3+4)`. Every operator groups to the left, including `^`: `2^3^2` means
/// `(2^3)^2`.
///
/// # Panics
///
/// The lexemes must have passed [`validate`](crate::validation::validate). Panics if they do not
/// form a well formed expression.
pub fn build(lexemes: &[Lexeme<Tok>]) -> Expr {
    let mut ops = OpStack::new();
    let mut nodes = NodeStack::new();
    let mut prev: Option<Tok> = None;

    for lexeme in lexemes {
        let token = lexeme.token;
        match token {
            Tok::Number => nodes.push(Expr::Number(parse_number(lexeme.text))),
            Tok::LParen => {
                // Pushed without reducing, so `6/2(3)` is `6/(2*3)`.
                if prev == Some(Tok::Number) {
                    ops.push_op(BinOp::Mul);
                }
                ops.push_open_paren();
            }
            Tok::RParen => loop {
                match ops.pop() {
                    Some(StackItem::OpenParen) => break,
                    Some(StackItem::Op(op)) => nodes.reduce(op),
                    None => panic!("Bug: unbalanced parens reached the builder"),
                }
            },
            Tok::Space => continue,
            _ => {
                let op = BinOp::from_token(token).expect("operator token");
                push_op(&mut ops, &mut nodes, op);
            }
        }
        prev = Some(token);
    }

    while let Some(item) = ops.pop() {
        match item {
            StackItem::Op(op) => nodes.reduce(op),
            StackItem::OpenParen => panic!("Bug: unclosed paren reached the builder"),
        }
    }
    nodes.finish()
}

fn push_op(ops: &mut OpStack, nodes: &mut NodeStack, op: BinOp) {
    while let Some(top) = ops.pop_at_least(op.prec()) {
        nodes.reduce(top);
    }
    ops.push_op(op);
}

fn parse_number(text: &str) -> f64 {
    // The lexer only produces `[0-9]+(\.[0-9]*)?`, which always parses. Overly large literals
    // become infinity.
    text.parse::<f64>()
        .unwrap_or_else(|err| panic!("Bug: number lexeme '{}': {}", text, err))
}

#[derive(Debug)]
struct NodeStack {
    stack: Vec<Expr>,
}

impl NodeStack {
    fn new() -> NodeStack {
        NodeStack { stack: vec![] }
    }

    fn push(&mut self, expr: Expr) {
        self.stack.push(expr);
    }

    /// Pop two operands and push `op` applied to them.
    fn reduce(&mut self, op: BinOp) {
        let right = self.pop();
        let left = self.pop();
        self.stack.push(Expr::binary(op, left, right));
    }

    fn pop(&mut self) -> Expr {
        self.stack
            .pop()
            .unwrap_or_else(|| panic!("Bug: missing operand reached the builder"))
    }

    fn finish(mut self) -> Expr {
        let root = self.pop();
        debug_assert!(self.stack.is_empty(), "builder left extra operands");
        root
    }
}
