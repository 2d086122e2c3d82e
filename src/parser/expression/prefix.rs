//! Prefix handling for the Pratt parser.
//!
//! Only literals may start an operand; unary operators are not part of the
//! grammar.

use crate::Token;
use crate::parser::ParseError;
use crate::parser::ast::Expr;

use super::Pratt;

impl Pratt<'_> {
    pub(super) fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let (token, span) = self.lexer.next_tok()?;
        match token {
            Token::Number { value, literal } => Ok(Expr::Number { value, literal }),
            token => Err(ParseError::UnexpectedToken {
                token,
                offset: span.start,
            }),
        }
    }
}
