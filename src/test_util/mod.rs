//! Helpers for constructing expression nodes and asserting parser results in
//! tests.

mod assertions;
mod expressions;

pub use assertions::{parse_err, parse_ok};
pub use expressions::{add, div, lit_num, mul, pow, sub};
