//! Library crate for prattcalc.
//!
//! Parses single-line integer arithmetic with a Pratt parser and either
//! evaluates the resulting tree or renders it as an S-expression.
//!
//! ```
//! let expr = prattcalc::parse("10 - 3 - 2").unwrap_or_else(|e| panic!("{e}"));
//! assert_eq!(expr.to_sexpr(), "(- (- 10 3) 2)");
//! assert_eq!(expr.evaluate(), Ok(prattcalc::Value::Integer(5)));
//! ```

#![forbid(unsafe_code)]

pub mod language;
pub mod parser;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod test_util;

pub use language::Token;
pub use parser::ast::{Associativity, BinaryOp, EvalError, Expr, Value};
pub use parser::{Error, ParseError, evaluate_str, parse};
pub use tokenizer::{Lexer, Span, tokenize};
