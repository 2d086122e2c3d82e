//! Shared test utilities for integration tests.
//!
//! These helpers construct expression nodes and unwrap parser results. They
//! mirror a subset of the crate-internal test helpers so integration tests
//! compile against the public API only.

use prattcalc::{BinaryOp, Expr, ParseError, parse};

/// Construct a numeric [`Expr::Number`] from its source text.
#[must_use]
pub fn lit_num(text: &str) -> Expr {
    let value = text
        .parse()
        .unwrap_or_else(|e| panic!("invalid literal {text:?}: {e}"));
    Expr::number(value, text)
}

/// Construct a binary node.
#[must_use]
pub fn bin(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// Parse `src`, panicking with the error if parsing fails.
#[track_caller]
#[must_use]
pub fn parse_ok(src: &str) -> Expr {
    parse(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

/// Parse `src`, panicking if it unexpectedly succeeds.
#[track_caller]
#[must_use]
pub fn parse_err(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("expected {src:?} to fail, got {}", expr.to_sexpr()),
        Err(e) => e,
    }
}
