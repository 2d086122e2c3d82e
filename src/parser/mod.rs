//! Parsing entry points.
//!
//! [`parse`] turns a source string into an [`ast::Expr`] using the Pratt
//! parser in [`expression`]. [`evaluate_str`] chains parsing and evaluation
//! for callers that only want the number.

pub mod ast;
mod error;
pub mod expression;

pub use error::{Error, ParseError};

use ast::{Expr, Value};

/// Parse `src` into a complete expression tree.
///
/// # Errors
/// Returns a [`ParseError`] for unrecognised input, a missing operand or
/// trailing tokens after a complete expression. No partial tree is produced.
pub fn parse(src: &str) -> Result<Expr, ParseError> {
    expression::parse_expression(src)
}

/// Parse and evaluate `src` in one step.
///
/// ```
/// use prattcalc::{Value, evaluate_str};
///
/// assert_eq!(evaluate_str("2 ^ 3 ^ 2"), Ok(Value::Integer(512)));
/// ```
///
/// # Errors
/// Returns [`Error::Parse`] or [`Error::Eval`] depending on which stage
/// failed.
pub fn evaluate_str(src: &str) -> Result<Value, Error> {
    Ok(parse(src)?.evaluate()?)
}

#[cfg(test)]
mod tests;
