//! Generator errors.

use std::io;

use jq_parse::ParseError;
use thiserror::Error;

/// Any failure of a generator run. All of them are fatal.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to parse definition `{name}`: {source}")]
    Parse { name: String, source: ParseError },

    #[error("definition `{name}` appears more than once")]
    DuplicateDefinition { name: String },

    /// The built expression does not have the shape the generator reads.
    #[error("unexpected ast: expected {kind}, found `{node}`")]
    UnexpectedAst { kind: &'static str, node: String },

    #[error("failed to write {destination}: {source}")]
    Io {
        destination: String,
        source: io::Error,
    },
}
