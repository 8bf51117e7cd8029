//! Lexer for the jq expression language using logos.
//!
//! Whitespace and `#` comments are skipped. String literals are kept raw;
//! [`unescape`] turns them into their value once the parser needs it.

mod escape;
mod token;

use logos::Logos;
use thiserror::Error;

pub use escape::{unescape, StringError};
pub use token::Token;

/// Byte range in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A token together with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lexeme<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid token `{text}` at offset {offset}")]
    InvalidToken { offset: usize, text: String },
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },
}

/// Tokenize `source` completely, stopping at the first invalid token.
pub fn lex(source: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();
    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => lexemes.push(Lexeme { token, span }),
            Err(()) if lexer.slice().starts_with('"') => {
                return Err(LexError::UnterminatedString { offset: span.start });
            }
            Err(()) => {
                return Err(LexError::InvalidToken {
                    offset: span.start,
                    text: lexer.slice().to_string(),
                });
            }
        }
    }
    Ok(lexemes)
}
