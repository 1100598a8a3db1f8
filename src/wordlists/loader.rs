//! Word list loading utilities
//!
//! Reads the master list and keeps the entries that are exactly 5 characters
//! long after trimming. Everything else is dropped without being reported.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file
///
/// Input order and exact duplicates are preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_pack::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle_official_list.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Convert the lines of an in-memory list to Word vector
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
///
/// # Examples
/// ```
/// use word_pack::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("crane\nabc\r slate \r\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .split(['\n', '\r'])
        .filter_map(|line| Word::new(line).ok())
        .collect()
}
