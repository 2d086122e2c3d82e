//! Expression tree, operator precedence and evaluation.
//!
//! [`Expr`] is the only tree the parser produces. Printing lives alongside the
//! type in `expr`, numeric evaluation in `eval`, and binding powers in
//! `precedence`.

mod eval;
mod expr;
mod precedence;

pub use eval::{EvalError, Value};
pub use expr::{BinaryOp, Expr};
pub use precedence::Associativity;
pub(crate) use precedence::infix_binding_power;
