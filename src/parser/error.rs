//! Error types reported by the parser and the evaluation entry points.

use thiserror::Error;

use crate::Token;
use crate::parser::ast::EvalError;

/// Reasons a source string fails to produce an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input at `offset` is not whitespace, a digit run or an operator.
    #[error("unexpected input at offset {offset}: {remainder:?}")]
    Lexical { offset: usize, remainder: String },
    /// A token appeared where it cannot start or continue an expression.
    #[error("unexpected token {token} at offset {offset}")]
    UnexpectedToken { token: Token, offset: usize },
    /// A digit run does not fit in an unsigned 64-bit integer.
    #[error("number literal {literal} at offset {offset} is out of range")]
    NumberOutOfRange { literal: String, offset: usize },
}

/// Any failure from parsing or evaluating an expression string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
