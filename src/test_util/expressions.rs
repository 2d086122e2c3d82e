//! Helpers for constructing expression nodes in tests.

use crate::parser::ast::{BinaryOp, Expr};

/// Construct a numeric [`Expr::Number`] from its source text.
///
/// # Panics
/// Panics if `text` is not a valid `u64` literal.
#[must_use]
pub fn lit_num(text: &str) -> Expr {
    let value = text
        .parse()
        .unwrap_or_else(|e| panic!("invalid literal {text:?}: {e}"));
    Expr::number(value, text)
}

#[must_use]
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, lhs, rhs)
}

#[must_use]
pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Sub, lhs, rhs)
}

#[must_use]
pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Mul, lhs, rhs)
}

#[must_use]
pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Div, lhs, rhs)
}

#[must_use]
pub fn pow(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Pow, lhs, rhs)
}
