use super::op::{BinOp, Prec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackItem {
    Op(BinOp),
    OpenParen,
}

/// The operators (and open parens) that are still waiting for their right argument.
#[derive(Debug, Clone)]
pub struct OpStack {
    stack: Vec<StackItem>,
}

impl OpStack {
    pub fn new() -> OpStack {
        OpStack { stack: vec![] }
    }

    pub fn push_op(&mut self, op: BinOp) {
        self.stack.push(StackItem::Op(op));
    }

    pub fn push_open_paren(&mut self) {
        self.stack.push(StackItem::OpenParen);
    }

    pub fn pop(&mut self) -> Option<StackItem> {
        self.stack.pop()
    }

    /// Pop the top operator if it should be applied before an incoming operator of precedence
    /// `prec`. Equal precedence pops too, so every operator groups to the left.
    pub fn pop_at_least(&mut self, prec: Prec) -> Option<BinOp> {
        match self.stack.last() {
            Some(StackItem::Op(op)) if op.prec() >= prec => {
                let op = *op;
                self.stack.pop();
                Some(op)
            }
            _ => None,
        }
    }
}
