mod node;
mod op;
mod op_stack;
mod shunt;

pub use node::Expr;
pub use op::{BinOp, Prec};
pub use op_stack::{OpStack, StackItem};
pub use shunt::build;
