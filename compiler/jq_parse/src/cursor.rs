//! Token cursor for navigating the lexeme stream.

use jq_lexer::{Lexeme, Span, Token};

use crate::ParseError;

/// Position in a fully lexed program. There is no EOF token: running off
/// the end yields `None` and errors point at the end of the source.
pub struct Cursor<'src> {
    lexemes: Vec<Lexeme<'src>>,
    pos: usize,
    source_len: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(lexemes: Vec<Lexeme<'src>>, source_len: usize) -> Self {
        Cursor {
            lexemes,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    pub fn peek(&self) -> Option<Token<'src>> {
        self.peek_nth(0)
    }

    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<Token<'src>> {
        self.lexemes.get(self.pos + n).map(|l| l.token)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    /// Byte offset of the current token, or the source length at the end.
    pub fn offset(&self) -> usize {
        self.lexemes
            .get(self.pos)
            .map_or(self.source_len, |l| l.span.start)
    }

    pub fn advance(&mut self) -> Option<Lexeme<'src>> {
        let lexeme = self.lexemes.get(self.pos).copied()?;
        self.pos += 1;
        Some(lexeme)
    }

    /// Whether the current token equals `token`, payload included.
    #[inline]
    pub fn check(&self, token: &Token<'_>) -> bool {
        self.peek().as_ref() == Some(token)
    }

    /// Consume the current token if it equals `token`.
    pub fn eat(&mut self, token: &Token<'_>) -> bool {
        if self.check(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, token: &Token<'_>, expected: &'static str) -> Result<Span, ParseError> {
        match self.lexemes.get(self.pos) {
            Some(lexeme) if lexeme.token == *token => {
                self.pos += 1;
                Ok(lexeme.span)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Error for whatever sits at the current position.
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => ParseError::UnexpectedToken {
                offset: lexeme.span.start,
                found: lexeme.token.to_string(),
                expected,
            },
            None => ParseError::UnexpectedEof {
                offset: self.source_len,
                expected,
            },
        }
    }
}
