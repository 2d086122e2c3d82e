//! Token model for arithmetic expressions.
//!
//! A [`Token`] is one lexeme of the input together with the static binding
//! precedence the Pratt parser compares against its running threshold.
//! Operator tokens map onto a [`BinaryOp`]; `Number` and `EndOfInput` bind
//! with precedence zero so they always terminate an infix loop.

use std::fmt;

use crate::parser::ast::BinaryOp;

/// Every token the lexer can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Unsigned integer literal, keeping the source text for printing.
    Number { value: u64, literal: String },
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
    /// Sentinel produced once the input is exhausted.
    EndOfInput,
}

impl Token {
    /// Binding precedence of this token.
    ///
    /// Only operators bind; literals and the end sentinel report zero.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self.binary_op() {
            Some(op) => op.precedence(),
            None => 0,
        }
    }

    /// The binary operator this token denotes, if any.
    #[must_use]
    pub const fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Self::Add => Some(BinaryOp::Add),
            Self::Subtract => Some(BinaryOp::Sub),
            Self::Multiply => Some(BinaryOp::Mul),
            Self::Divide => Some(BinaryOp::Div),
            Self::Pow => Some(BinaryOp::Pow),
            Self::Number { .. } | Self::EndOfInput => None,
        }
    }

    /// Map a single operator character onto its token.
    #[must_use]
    pub const fn from_operator_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Add,
            '-' => Self::Subtract,
            '*' => Self::Multiply,
            '/' => Self::Divide,
            '^' => Self::Pow,
            _ => return None,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { literal, .. } => f.write_str(literal),
            Self::EndOfInput => f.write_str("end of input"),
            op => op
                .binary_op()
                .map_or(Ok(()), |op| write!(f, "'{}'", op.symbol())),
        }
    }
}
