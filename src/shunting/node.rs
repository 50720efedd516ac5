use super::op::BinOp;
use std::fmt;
use std::mem;

/// An arithmetic expression tree. Every node owns its children.
///
/// A chain like `1+1+...+1` builds a tree as deep as it is long, so every walk over the tree
/// (evaluating, displaying, dropping) uses an explicit stack instead of recursion.
pub enum Expr {
    Number(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

enum EvalStep<'e> {
    Visit(&'e Expr),
    Apply(BinOp),
}

enum DisplayStep<'e> {
    Visit(&'e Expr),
    Text(&'static str),
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            BinOp::Add => Expr::Add(left, right),
            BinOp::Sub => Expr::Sub(left, right),
            BinOp::Mul => Expr::Mul(left, right),
            BinOp::Div => Expr::Div(left, right),
            BinOp::Pow => Expr::Pow(left, right),
        }
    }

    /// The operator and operands of a binary node, or `None` for a number.
    pub fn as_binary(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Expr::Number(_) => None,
            Expr::Add(l, r) => Some((BinOp::Add, l, r)),
            Expr::Sub(l, r) => Some((BinOp::Sub, l, r)),
            Expr::Mul(l, r) => Some((BinOp::Mul, l, r)),
            Expr::Div(l, r) => Some((BinOp::Div, l, r)),
            Expr::Pow(l, r) => Some((BinOp::Pow, l, r)),
        }
    }

    fn children_mut(&mut self) -> Option<(&mut Box<Expr>, &mut Box<Expr>)> {
        match self {
            Expr::Number(_) => None,
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => Some((l, r)),
        }
    }

    /// Evaluate the tree, children first. Division by zero is not an error: it gives an infinity
    /// or NaN, as floats do.
    pub fn eval(&self) -> f64 {
        let mut steps = vec![EvalStep::Visit(self)];
        let mut values: Vec<f64> = vec![];
        while let Some(step) = steps.pop() {
            match step {
                EvalStep::Visit(Expr::Number(n)) => values.push(*n),
                EvalStep::Visit(expr) => {
                    if let Some((op, left, right)) = expr.as_binary() {
                        steps.push(EvalStep::Apply(op));
                        steps.push(EvalStep::Visit(right));
                        steps.push(EvalStep::Visit(left));
                    }
                }
                EvalStep::Apply(op) => {
                    let right = pop_value(&mut values);
                    let left = pop_value(&mut values);
                    values.push(op.apply(left, right));
                }
            }
        }
        pop_value(&mut values)
    }
}

fn pop_value(values: &mut Vec<f64>) -> f64 {
    values
        .pop()
        .unwrap_or_else(|| panic!("Bug: evaluation stack underflow"))
}

/// Displays as an s-expression, like `(* 2 (+ 3 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut steps = vec![DisplayStep::Visit(self)];
        while let Some(step) = steps.pop() {
            match step {
                DisplayStep::Text(text) => write!(f, "{}", text)?,
                DisplayStep::Visit(Expr::Number(n)) => write!(f, "{}", n)?,
                DisplayStep::Visit(expr) => {
                    if let Some((op, left, right)) = expr.as_binary() {
                        write!(f, "({} ", op)?;
                        steps.push(DisplayStep::Text(")"));
                        steps.push(DisplayStep::Visit(right));
                        steps.push(DisplayStep::Text(" "));
                        steps.push(DisplayStep::Visit(left));
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expr({})", self)
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Detach the children before they are dropped, so each node is dropped with leaf children.
        let mut detached: Vec<Box<Expr>> = vec![];
        detach_children(self, &mut detached);
        while let Some(mut expr) = detached.pop() {
            detach_children(&mut expr, &mut detached);
        }
    }
}

fn detach_children(expr: &mut Expr, detached: &mut Vec<Box<Expr>>) {
    if let Some((left, right)) = expr.children_mut() {
        if left.as_binary().is_some() {
            detached.push(mem::replace(left, Box::new(Expr::Number(0.0))));
        }
        if right.as_binary().is_some() {
            detached.push(mem::replace(right, Box::new(Expr::Number(0.0))));
        }
    }
}
