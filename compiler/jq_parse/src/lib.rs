//! Recursive descent parser for jq.
//!
//! A program is a possibly empty run of `def`s followed by an optional
//! pipeline. Binary operators are parsed by precedence climbing:
//!
//! | level | operators                         | associativity |
//! |-------|-----------------------------------|---------------|
//! | 1     | `,`                               | left          |
//! | 2     | `//`                              | right         |
//! | 3     | `=` `\|=` `+=` `-=` `*=` `/=` `%=` `//=` | none   |
//! | 4     | `or`                              | left          |
//! | 5     | `and`                             | left          |
//! | 6     | `==` `!=` `<` `<=` `>` `>=`       | none          |
//! | 7     | `+` `-`                           | left          |
//! | 8     | `*` `/` `%`                       | left          |
//!
//! `|` binds loosest of all and associates to the right; its right operand
//! may start with further `def`s.

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
pub use error::ParseError;

use jq_ir::Query;
use tracing::debug;

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    /// Lex `source` and set up a parser over it.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let lexemes = jq_lexer::lex(source)?;
        debug!(tokens = lexemes.len(), "lexed");
        Ok(Parser {
            cursor: Cursor::new(lexemes, source.len()),
        })
    }
}

/// Parse a complete jq program.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Query, ParseError> {
    Parser::new(source)?.parse_program()
}

#[cfg(test)]
mod tests;
