//! Operator precedence table for arithmetic expressions.
//!
//! This module centralises binding power definitions for the binary
//! operators. The Pratt driver only ever compares these numbers, so adding an
//! operator means adding a row here and a token variant, nothing else.

use crate::Token;

use super::BinaryOp;

/// How a chain of equal-precedence operators groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct InfixEntry {
    prec: u8,
    assoc: Associativity,
}

const ADDITIVE: InfixEntry = InfixEntry {
    prec: 30,
    assoc: Associativity::Left,
};

const MULTIPLICATIVE: InfixEntry = InfixEntry {
    prec: 40,
    assoc: Associativity::Left,
};

const EXPONENT: InfixEntry = InfixEntry {
    prec: 50,
    assoc: Associativity::Right,
};

const fn entry(op: BinaryOp) -> InfixEntry {
    match op {
        BinaryOp::Add | BinaryOp::Sub => ADDITIVE,
        BinaryOp::Mul | BinaryOp::Div => MULTIPLICATIVE,
        BinaryOp::Pow => EXPONENT,
    }
}

impl BinaryOp {
    /// Binding precedence of the operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        entry(self).prec
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        entry(self).assoc
    }

    /// Threshold used when parsing the right-hand operand.
    ///
    /// Left-associative operators pass their own precedence so an equal
    /// operator to the right is left for the enclosing loop. Right-associative
    /// operators pass one less so the next equal operator is absorbed.
    #[must_use]
    pub const fn rhs_threshold(self) -> u8 {
        let InfixEntry { prec, assoc } = entry(self);
        match assoc {
            Associativity::Left => prec,
            Associativity::Right => prec.saturating_sub(1),
        }
    }
}

/// Lookup the binding power and [`BinaryOp`] for an infix token.
///
/// Returns the operator precedence, the right-hand threshold and the operator
/// variant, or `None` when the token cannot appear in infix position.
pub(crate) fn infix_binding_power(token: &Token) -> Option<(u8, u8, BinaryOp)> {
    token
        .binary_op()
        .map(|op| (op.precedence(), op.rhs_threshold(), op))
}
