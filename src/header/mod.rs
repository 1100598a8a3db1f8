//! C header generation
//!
//! Renders the sorted collection as a `PROGMEM` character array wrapped in an
//! include guard. The array is written as adjacent string literals, which the
//! compiler joins into one contiguous buffer.

pub mod pack;

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Names and layout used when rendering the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub guard: String,
    pub include: String,
    pub pack_name: String,
    pub count_name: String,
    pub words_per_line: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            guard: "WORD_LIST_H".to_string(),
            include: "<avr/pgmspace.h>".to_string(),
            pack_name: "WORD_PACK".to_string(),
            count_name: "WORD_COUNT".to_string(),
            words_per_line: 4,
        }
    }
}

/// A collection ready to be written as a header
pub struct Header<'a> {
    words: &'a [Word],
    config: &'a HeaderConfig,
}

impl<'a> Header<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word], config: &'a HeaderConfig) -> Self {
        Self { words, config }
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let HeaderConfig {
            guard,
            include,
            pack_name,
            count_name,
            words_per_line,
        } = self.config;

        writeln!(f, "#ifndef {guard}")?;
        writeln!(f, "#define {guard}")?;
        writeln!(f)?;
        writeln!(f, "#include {include}")?;
        writeln!(f)?;
        writeln!(f, "// WORD STORAGE OPTIMIZATION")?;
        writeln!(
            f,
            "// This list contains only 5-letter words with NO duplicate letters"
        )?;
        writeln!(f, "// Words are sorted alphabetically for binary search")?;
        writeln!(f)?;
        writeln!(
            f,
            "// Packed word list - all words concatenated (alphabetically sorted)"
        )?;
        writeln!(f, "const char {pack_name}[] PROGMEM =")?;

        if self.words.is_empty() {
            writeln!(f, "  \"\"")?;
        }
        for chunk in self.words.chunks((*words_per_line).max(1)) {
            let segments: Vec<String> = chunk
                .iter()
                .map(|word| format!("\"{word}\""))
                .collect();
            writeln!(f, "  {}", segments.join(" "))?;
        }

        writeln!(f, ";")?;
        writeln!(f)?;
        writeln!(f, "// Number of words in the dictionary")?;
        writeln!(f, "const int {count_name} = {};", self.words.len())?;
        writeln!(f)?;
        writeln!(f, "#endif // {guard}")
    }
}

/// Render the full header text
///
/// # Examples
/// ```
/// use word_pack::header::{HeaderConfig, render_header};
/// use word_pack::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("abcde\ncrane\n");
/// let text = render_header(&words, &HeaderConfig::default());
/// assert!(text.contains("  \"ABCDE\" \"CRANE\"\n"));
/// assert!(text.contains("const int WORD_COUNT = 2;"));
/// ```
#[must_use]
pub fn render_header(words: &[Word], config: &HeaderConfig) -> String {
    Header::new(words, config).to_string()
}

/// Write the header to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_header<P: AsRef<Path>>(
    path: P,
    words: &[Word],
    config: &HeaderConfig,
) -> io::Result<()> {
    fs::write(path, render_header(words, config))
}
