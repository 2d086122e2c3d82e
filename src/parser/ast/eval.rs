//! Numeric evaluation of expression trees.
//!
//! Integer operands stay integral through `+`, `-`, `*` and `^` as long as
//! the result fits in an `i128`; anything that overflows is recomputed in
//! `f64`. Division always produces a real quotient.

use std::fmt;
use std::num::FpCategory;

use num_traits::{ToPrimitive, checked_pow};
use thiserror::Error;

use super::{BinaryOp, Expr};

/// Result of evaluating an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i128),
    Real(f64),
}

impl Value {
    /// The value as a float, converting integers as needed.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i.to_f64().unwrap_or(f64::NAN),
            Self::Real(r) => r,
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Real(r) => r.classify() == FpCategory::Zero,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // Debug formatting keeps the trailing `.0` on whole reals.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

/// Errors raised while evaluating a complete tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A division or negative power had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

impl Expr {
    /// Evaluate the tree in post-order.
    ///
    /// ```
    /// use prattcalc::Value;
    ///
    /// let expr = prattcalc::parse("7 / 2").unwrap_or_else(|e| panic!("{e}"));
    /// assert_eq!(expr.evaluate(), Ok(Value::Real(3.5)));
    /// ```
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when a divisor evaluates to zero.
    pub fn evaluate(&self) -> Result<Value, EvalError> {
        match self {
            Self::Number { value, .. } => Ok(Value::Integer(i128::from(*value))),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.evaluate()?, rhs.evaluate()?),
        }
    }
}

impl BinaryOp {
    /// Apply the operator to two evaluated operands.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] for `x / 0` and `0 ^ -n`.
    #[expect(
        clippy::float_arithmetic,
        reason = "overflowing integer results fall back to floats"
    )]
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
        match self {
            Self::Add => Ok(integral_or_real(lhs, rhs, i128::checked_add, |a, b| a + b)),
            Self::Sub => Ok(integral_or_real(lhs, rhs, i128::checked_sub, |a, b| a - b)),
            Self::Mul => Ok(integral_or_real(lhs, rhs, i128::checked_mul, |a, b| a * b)),
            Self::Div => divide(lhs, rhs),
            Self::Pow => power(lhs, rhs),
        }
    }
}

fn integral_or_real(
    lhs: Value,
    rhs: Value,
    int_op: fn(i128, i128) -> Option<i128>,
    real_op: fn(f64, f64) -> f64,
) -> Value {
    if let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs)
        && let Some(v) = int_op(a, b)
    {
        return Value::Integer(v);
    }
    Value::Real(real_op(lhs.as_f64(), rhs.as_f64()))
}

#[expect(clippy::float_arithmetic, reason = "division is always real-valued")]
fn divide(lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    if rhs.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Real(lhs.as_f64() / rhs.as_f64()))
}

fn power(base: Value, exp: Value) -> Result<Value, EvalError> {
    if base.is_zero() && exp.as_f64().is_sign_negative() && !exp.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    if let (Value::Integer(b), Value::Integer(e)) = (base, exp)
        && let Some(v) = usize::try_from(e).ok().and_then(|e| checked_pow(b, e))
    {
        return Ok(Value::Integer(v));
    }
    Ok(Value::Real(base.as_f64().powf(exp.as_f64())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn int(i: i128) -> Value {
        Value::Integer(i)
    }

    #[rstest]
    #[case(BinaryOp::Add, int(2), int(3), int(5))]
    #[case(BinaryOp::Sub, int(2), int(3), int(-1))]
    #[case(BinaryOp::Mul, int(6), int(7), int(42))]
    #[case(BinaryOp::Div, int(6), int(2), Value::Real(3.0))]
    #[case(BinaryOp::Div, int(7), int(2), Value::Real(3.5))]
    #[case(BinaryOp::Pow, int(2), int(10), int(1024))]
    #[case(BinaryOp::Pow, int(5), int(0), int(1))]
    #[case(BinaryOp::Pow, int(2), int(-1), Value::Real(0.5))]
    #[case(BinaryOp::Add, Value::Real(0.5), int(1), Value::Real(1.5))]
    fn applies_operators(
        #[case] op: BinaryOp,
        #[case] lhs: Value,
        #[case] rhs: Value,
        #[case] expected: Value,
    ) {
        assert_eq!(op.apply(lhs, rhs), Ok(expected));
    }

    #[test]
    fn overflow_promotes_to_real() {
        let big = int(i128::MAX);
        let Ok(Value::Real(sum)) = BinaryOp::Add.apply(big, int(1)) else {
            panic!("expected real result");
        };
        assert!(sum > 1e38);
        let Ok(Value::Real(_)) = BinaryOp::Pow.apply(int(10), int(100)) else {
            panic!("expected real result");
        };
    }

    #[rstest]
    #[case(BinaryOp::Div, int(1), int(0))]
    #[case(BinaryOp::Div, int(0), Value::Real(0.0))]
    #[case(BinaryOp::Pow, int(0), int(-2))]
    fn zero_divisors_are_rejected(#[case] op: BinaryOp, #[case] lhs: Value, #[case] rhs: Value) {
        assert_eq!(op.apply(lhs, rhs), Err(EvalError::DivisionByZero));
    }

    #[rstest]
    #[case(int(5), "5")]
    #[case(int(-12), "-12")]
    #[case(Value::Real(3.0), "3.0")]
    #[case(Value::Real(3.5), "3.5")]
    fn display_distinguishes_reals(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let expr = Expr::binary(
            BinaryOp::Div,
            Expr::number(9, "9"),
            Expr::number(3, "3"),
        );
        assert_eq!(expr.evaluate(), expr.evaluate());
        assert!(!expr.evaluate().is_ok_and(Value::is_integer));
    }
}
