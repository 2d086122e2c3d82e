//! Infix operator handling for the Pratt parser.

use crate::Token;
use crate::parser::ParseError;
use crate::parser::ast::{Expr, infix_binding_power};
use crate::tokenizer::Span;

use super::pratt::Pratt;

impl Pratt<'_> {
    pub(super) fn parse_infix(&mut self, mut lhs: Expr, min_prec: u8) -> Result<Expr, ParseError> {
        while self.lexer.peek_tok()?.0.precedence() > min_prec {
            let (token, span) = self.lexer.next_tok()?;
            lhs = self.parse_operator(token, span, lhs)?;
        }
        Ok(lhs)
    }

    fn parse_operator(&mut self, token: Token, span: Span, lhs: Expr) -> Result<Expr, ParseError> {
        let Some((_, rhs_threshold, op)) = infix_binding_power(&token) else {
            return Err(ParseError::UnexpectedToken {
                token,
                offset: span.start,
            });
        };
        let rhs = self.parse_expr(rhs_threshold)?;
        Ok(Expr::binary(op, lhs, rhs))
    }
}
