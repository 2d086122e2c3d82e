//! Assertion helpers for parser results in tests.

use crate::parser::ast::Expr;
use crate::parser::{ParseError, parse};

/// Parse `src`, panicking with the error if parsing fails.
///
/// # Panics
/// Panics when `src` does not parse.
#[track_caller]
#[must_use]
pub fn parse_ok(src: &str) -> Expr {
    parse(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

/// Parse `src`, panicking if it unexpectedly succeeds.
///
/// # Panics
/// Panics when `src` parses.
#[track_caller]
#[must_use]
pub fn parse_err(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("expected {src:?} to fail, got {}", expr.to_sexpr()),
        Err(e) => e,
    }
}
