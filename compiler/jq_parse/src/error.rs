//! Parse error types.

use jq_ir::Operator;
use jq_lexer::{LexError, StringError};
use thiserror::Error;

/// Why a program failed to parse. Offsets are byte offsets into the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unexpected token `{found}` at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        found: String,
        expected: &'static str,
    },

    #[error("unexpected end of input at offset {offset}, expected {expected}")]
    UnexpectedEof {
        offset: usize,
        expected: &'static str,
    },

    #[error("invalid number `{text}` at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("invalid string literal at offset {offset}: {source}")]
    InvalidString {
        offset: usize,
        #[source]
        source: StringError,
    },

    /// `a == b == c` and friends.
    #[error("operator `{op}` at offset {offset} cannot be chained")]
    NonAssociative { offset: usize, op: Operator },
}

impl ParseError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Lex(
                LexError::InvalidToken { offset, .. } | LexError::UnterminatedString { offset },
            )
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnexpectedEof { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::InvalidString { offset, .. }
            | ParseError::NonAssociative { offset, .. } => *offset,
        }
    }
}
