//! Expression tree for parsed arithmetic.
//!
//! The Pratt parser builds an [`Expr`] bottom-up. A binary node is only ever
//! constructed once both operands have been parsed, so every tree handed to
//! callers is complete.

use std::fmt;

/// Binary operators in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Operator as written in the source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Operator name used in the S-expression rendering.
    ///
    /// Exponentiation prints as `pow`; the others reuse their surface symbol.
    #[must_use]
    pub const fn sexpr_symbol(self) -> &'static str {
        match self {
            Self::Pow => "pow",
            op => op.symbol(),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal with its original spelling.
    Number { value: u64, literal: String },
    Binary {
        op: BinaryOp,
        lhs: Box<Self>,
        rhs: Box<Self>,
    },
}

impl Expr {
    /// Build a literal node from its source text and parsed value.
    #[must_use]
    pub fn number(value: u64, literal: impl Into<String>) -> Self {
        Self::Number {
            value,
            literal: literal.into(),
        }
    }

    /// Build a binary node owning both operands.
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Display the expression as a fully parenthesised S-expression.
    ///
    /// ```
    /// let expr = prattcalc::parse("1 + 2 * 3").unwrap_or_else(|e| panic!("{e}"));
    /// assert_eq!(expr.to_sexpr(), "(+ 1 (* 2 3))");
    /// ```
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Number { literal, .. } => literal.clone(),
            Self::Binary { op, lhs, rhs } => {
                format!("({} {} {})", op.sexpr_symbol(), lhs.to_sexpr(), rhs.to_sexpr())
            }
        }
    }

    /// Number of operator nodes between the root and the deepest leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 0,
            Self::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}
