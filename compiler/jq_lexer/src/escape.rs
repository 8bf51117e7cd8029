//! String literal unescaping.
//!
//! Valid escapes: `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t` and `\uXXXX`, with
//! UTF-16 surrogate pairs combined. `\(` opens a string interpolation, which
//! is rejected.

use std::str::CharIndices;

use thiserror::Error;

/// A string literal that could not be unescaped. Offsets are relative to
/// the opening quote.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StringError {
    #[error("invalid escape `\\{escape}` at offset {offset}")]
    InvalidEscape { offset: usize, escape: char },
    #[error("invalid unicode escape at offset {offset}")]
    InvalidUnicode { offset: usize },
    #[error("string interpolation is not supported (offset {offset})")]
    Interpolation { offset: usize },
    #[error("string literal is not quoted")]
    Unquoted,
}

/// Unescape a quoted string literal as it appears in source.
pub fn unescape(raw: &str) -> Result<String, StringError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StringError::Unquoted)?;

    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        // +1 for the opening quote.
        let offset = i + 1;
        let escaped = match chars.next() {
            Some((_, '"')) => '"',
            Some((_, '\\')) => '\\',
            Some((_, '/')) => '/',
            Some((_, 'b')) => '\u{8}',
            Some((_, 'f')) => '\u{c}',
            Some((_, 'n')) => '\n',
            Some((_, 'r')) => '\r',
            Some((_, 't')) => '\t',
            Some((_, 'u')) => unicode_escape(&mut chars, offset)?,
            Some((_, '(')) => return Err(StringError::Interpolation { offset }),
            Some((_, escape)) => return Err(StringError::InvalidEscape { offset, escape }),
            None => return Err(StringError::InvalidEscape { offset, escape: '"' }),
        };
        result.push(escaped);
    }
    Ok(result)
}

fn hex4(chars: &mut CharIndices<'_>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        let (_, c) = chars.next()?;
        value = value * 16 + c.to_digit(16)?;
    }
    Some(value)
}

/// The code point after `\u`, reading a trailing low surrogate if needed.
fn unicode_escape(chars: &mut CharIndices<'_>, offset: usize) -> Result<char, StringError> {
    let invalid = StringError::InvalidUnicode { offset };
    let high = hex4(chars).ok_or_else(|| invalid.clone())?;
    if !(0xD800..0xDC00).contains(&high) {
        return char::from_u32(high).ok_or(invalid);
    }
    let low = match (chars.next(), chars.next()) {
        (Some((_, '\\')), Some((_, 'u'))) => hex4(chars).ok_or_else(|| invalid.clone())?,
        _ => return Err(invalid),
    };
    if !(0xDC00..0xE000).contains(&low) {
        return Err(invalid);
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)).ok_or(invalid)
}
