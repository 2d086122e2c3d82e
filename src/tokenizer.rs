//! Lexical analysis for arithmetic expressions.
//!
//! The [`Lexer`] scans one token at a time on demand. Recognition of a single
//! lexeme is delegated to a `logos`-derived matcher run from the current
//! cursor; the lexer itself only tracks the byte offset and the most recently
//! consumed token.

use std::iter::FusedIterator;

use logos::Logos;

use crate::Token;
use crate::parser::ParseError;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[+\-*/^]")]
    Operator,
}

/// On-demand tokenizer with one token of lookahead.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    src: &'src str,
    offset: usize,
    current: Option<Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            offset: 0,
            current: None,
            finished: false,
        }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The token most recently returned by [`Lexer::next_tok`].
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Compute the next token without moving the cursor.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the input at the cursor is not a token.
    pub fn peek_tok(&self) -> Result<(Token, Span), ParseError> {
        self.scan_at()
    }

    /// Consume and return the next token.
    ///
    /// Once the input is exhausted this keeps returning
    /// [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the input at the cursor is not a token.
    /// The cursor does not move in that case.
    pub fn next_tok(&mut self) -> Result<(Token, Span), ParseError> {
        let (token, span) = self.scan_at()?;
        self.offset = span.end;
        self.current = Some(token.clone());
        Ok((token, span))
    }

    fn scan_at(&self) -> Result<(Token, Span), ParseError> {
        let rest = self.src.get(self.offset..).unwrap_or_default();
        let mut lexer = Lexeme::lexer(rest);
        loop {
            let Some(result) = lexer.next() else {
                let end = self.src.len();
                return Ok((Token::EndOfInput, end..end));
            };
            let span = (self.offset + lexer.span().start)..(self.offset + lexer.span().end);
            let Ok(lexeme) = result else {
                return Err(self.lexical_error(span.start));
            };
            let text = lexer.slice();
            let token = match lexeme {
                Lexeme::Whitespace => continue,
                Lexeme::Number => {
                    let value = text
                        .parse::<u64>()
                        .map_err(|_| ParseError::NumberOutOfRange {
                            literal: text.to_string(),
                            offset: span.start,
                        })?;
                    Token::Number {
                        value,
                        literal: text.to_string(),
                    }
                }
                Lexeme::Operator => text
                    .chars()
                    .next()
                    .and_then(Token::from_operator_char)
                    .ok_or_else(|| self.lexical_error(span.start))?,
            };
            return Ok((token, span));
        }
    }

    fn lexical_error(&self, offset: usize) -> ParseError {
        ParseError::Lexical {
            offset,
            remainder: self.src.get(offset..).unwrap_or_default().to_string(),
        }
    }
}

// Iteration stops after the end-of-input token or the first error.
impl FusedIterator for Lexer<'_> {}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, Span), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_tok();
        if matches!(item, Ok((Token::EndOfInput, _)) | Err(_)) {
            self.finished = true;
        }
        Some(item)
    }
}

/// Tokenise `src` up to and including [`Token::EndOfInput`].
///
/// # Examples
///
/// ```rust
/// use prattcalc::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap_or_else(|e| panic!("{e}"));
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].0, Token::Add);
/// ```
///
/// # Errors
/// Returns the first lexical error encountered.
pub fn tokenize(src: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    Lexer::new(src).collect()
}
