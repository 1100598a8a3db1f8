//! Packed buffer encoding
//!
//! The device stores every word back to back with no delimiter and recovers
//! word `i` from characters `5 * i .. 5 * i + 5`.

use super::HeaderConfig;
use crate::core::{WORD_LEN, Word};
use std::fmt;

/// Error type for packed buffers and headers that cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    LengthMismatch { expected: usize, actual: usize },
    MissingPack(String),
    MissingCount(String),
    InvalidCount(String),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Packed buffer should hold {expected} characters, found {actual}"
                )
            }
            Self::MissingPack(name) => write!(f, "No `{name}` array in header"),
            Self::MissingCount(name) => write!(f, "No `{name}` constant in header"),
            Self::InvalidCount(value) => write!(f, "Word count is not a number: {value}"),
        }
    }
}

impl std::error::Error for PackError {}

/// Concatenate all words into one buffer
///
/// # Examples
/// ```
/// use word_pack::header::pack::packed_buffer;
/// use word_pack::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("abcde\ncrane\n");
/// assert_eq!(packed_buffer(&words), "ABCDECRANE");
/// ```
#[must_use]
pub fn packed_buffer(words: &[Word]) -> String {
    words.iter().map(Word::text).collect()
}

/// Split a packed buffer back into `count` fixed-width words
///
/// # Errors
/// Returns `PackError::LengthMismatch` if the buffer is not exactly
/// `count * 5` characters long. A count too large to have a length reports
/// `usize::MAX` as the expected length.
pub fn unpack(buffer: &str, count: usize) -> Result<Vec<String>, PackError> {
    let chars: Vec<char> = buffer.chars().collect();

    let expected = count.checked_mul(WORD_LEN);
    if expected != Some(chars.len()) {
        return Err(PackError::LengthMismatch {
            expected: expected.unwrap_or(usize::MAX),
            actual: chars.len(),
        });
    }

    Ok(chars
        .chunks(WORD_LEN)
        .map(|chunk| chunk.iter().collect())
        .collect())
}

/// Recover the logical packed buffer and word count from a rendered header
///
/// Adjacent string literals are concatenated the way the C compiler does.
///
/// # Errors
/// Returns a `PackError` if either constant is absent or the count does not parse.
pub fn parse_header(text: &str, config: &HeaderConfig) -> Result<(String, usize), PackError> {
    let pack_decl = format!("const char {}[]", config.pack_name);
    let count_decl = format!("const int {} =", config.count_name);

    let mut lines = text.lines();
    if !lines.any(|line| line.starts_with(&pack_decl)) {
        return Err(PackError::MissingPack(config.pack_name.clone()));
    }

    let mut buffer = String::new();
    for line in lines.by_ref() {
        if line.trim() == ";" {
            break;
        }
        // Literal contents sit between every other pair of quotes
        buffer.extend(line.split('"').skip(1).step_by(2));
    }

    let count_line = lines
        .find_map(|line| line.strip_prefix(&count_decl))
        .ok_or_else(|| PackError::MissingCount(config.count_name.clone()))?;
    let value = count_line.trim().trim_end_matches(';').trim();
    let count = value
        .parse()
        .map_err(|_| PackError::InvalidCount(value.to_string()))?;

    Ok((buffer, count))
}
