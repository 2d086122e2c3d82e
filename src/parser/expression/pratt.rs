//! Core Pratt parser implementation and entry point.
//!
//! This module defines the [`Pratt`] struct and the public
//! [`parse_expression`] function which drives the lexer and builds the
//! expression tree.

use crate::Token;
use crate::parser::ParseError;
use crate::parser::ast::Expr;
use crate::tokenizer::Lexer;

pub(super) struct Pratt<'src> {
    pub(super) lexer: Lexer<'src>,
}

/// Parse a source string into an [`Expr`].
///
/// Runs the Pratt driver once with a zero threshold and then requires the
/// input to be exhausted.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; parsing stops there.
#[must_use = "discarding the Result will ignore parse errors"]
pub fn parse_expression(src: &str) -> Result<Expr, ParseError> {
    let mut parser = Pratt::new(src);
    let expr = parser.parse_expr(0)?;
    parser.expect_end()?;
    Ok(expr)
}

impl<'src> Pratt<'src> {
    #[must_use]
    pub(super) fn new(src: &'src str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }

    /// Parse the sub-expression whose operators all bind tighter than
    /// `min_prec`.
    pub(super) fn parse_expr(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let lhs = self.parse_prefix()?;
        self.parse_infix(lhs, min_prec)
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.lexer.peek_tok()? {
            (Token::EndOfInput, _) => Ok(()),
            (token, span) => Err(ParseError::UnexpectedToken {
                token,
                offset: span.start,
            }),
        }
    }
}
