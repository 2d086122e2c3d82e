//! Pratt parser for arithmetic expressions.
//!
//! Provides [`parse_expression`], a hand-rolled Pratt parser driven purely by
//! operator precedence. The implementation is split across submodules:
//! [`pratt`] hosts the driver and entry point, [`prefix`] handles tokens that
//! start an operand, and [`infix`] folds binary operators onto a parsed left
//! operand.

mod infix;
mod pratt;
mod prefix;

pub use pratt::parse_expression;

use pratt::Pratt;
