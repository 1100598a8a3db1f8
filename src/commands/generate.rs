//! Header generation command
//!
//! Reads the master list, keeps the unique-letter words, sorts them and writes
//! the packed header.

use crate::core::Word;
use crate::header::{HeaderConfig, render_header, write_header};
use crate::wordlists::build_collection;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Master list read when no input is given
pub const DEFAULT_INPUT: &str = "wordle_official_list.txt";

/// Header written when no output is given
pub const DEFAULT_OUTPUT: &str = "filtered_word_list.h";

/// Configuration for generating the header
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub header: HeaderConfig,
    pub preview: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            header: HeaderConfig::default(),
            preview: 10,
        }
    }
}

/// Result of generating the header
pub struct GenerateResult {
    /// Entries of the master list that are 5 characters long
    pub total_words: usize,
    pub filtered_words: Vec<Word>,
    pub output: PathBuf,
}

/// Result of comparing the existing header with a fresh rendering
pub struct CheckResult {
    pub total_words: usize,
    pub filtered_count: usize,
    pub output: PathBuf,
    pub up_to_date: bool,
}

fn load_collection(config: &GenerateConfig) -> Result<(usize, Vec<Word>)> {
    let words = load_from_file(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;
    Ok((words.len(), build_collection(&words)))
}

/// Run the full pipeline and write the header
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
/// A failed write may leave a truncated header behind.
pub fn generate(config: &GenerateConfig) -> Result<GenerateResult> {
    let (total_words, filtered_words) = load_collection(config)?;

    write_header(&config.output, &filtered_words, &config.header)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(GenerateResult {
        total_words,
        filtered_words,
        output: config.output.clone(),
    })
}

/// Check whether the header on disk matches what `generate` would write
///
/// Nothing is written. A missing header counts as out of date.
///
/// # Errors
///
/// Returns an error if the input cannot be read, or the existing header exists
/// but cannot be read.
pub fn check(config: &GenerateConfig) -> Result<CheckResult> {
    let (total_words, filtered_words) = load_collection(config)?;
    let expected = render_header(&filtered_words, &config.header);

    let up_to_date = match fs::read_to_string(&config.output) {
        Ok(existing) => existing == expected,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            let path = config.output.display();
            return Err(e).with_context(|| format!("Failed to read {path}"));
        }
    };

    Ok(CheckResult {
        total_words,
        filtered_count: filtered_words.len(),
        output: config.output.clone(),
        up_to_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::pack::{parse_header, unpack};
    use std::path::Path;

    fn config_in(dir: &Path, list: &str) -> GenerateConfig {
        let input = dir.join(DEFAULT_INPUT);
        fs::write(&input, list).unwrap();
        GenerateConfig {
            input,
            output: dir.join(DEFAULT_OUTPUT),
            ..GenerateConfig::default()
        }
    }

    #[test]
    fn default_paths() {
        let config = GenerateConfig::default();
        assert_eq!(config.input, Path::new("wordle_official_list.txt"));
        assert_eq!(config.output, Path::new("filtered_word_list.h"));
        assert_eq!(config.preview, 10);
    }

    #[test]
    fn generate_example_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "APPLE\nCRANE\nBERRY\nABCDE\n");

        let result = generate(&config).unwrap();
        assert_eq!(result.total_words, 4);
        let texts: Vec<&str> = result.filtered_words.iter().map(Word::text).collect();
        assert_eq!(texts, ["ABCDE", "CRANE"]);

        let text = fs::read_to_string(&config.output).unwrap();
        let (buffer, count) = parse_header(&text, &config.header).unwrap();
        assert_eq!(buffer, "ABCDECRANE");
        assert_eq!(count, 2);
    }

    #[test]
    fn generate_counts_only_five_character_entries() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "abcd\nabcdef\ncrane\n\nslate\n");

        let result = generate(&config).unwrap();
        assert_eq!(result.total_words, 2);
        assert_eq!(result.filtered_words.len(), 2);
    }

    #[test]
    fn generate_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "");

        let result = generate(&config).unwrap();
        assert_eq!(result.total_words, 0);
        assert!(result.filtered_words.is_empty());

        let text = fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            parse_header(&text, &config.header).unwrap(),
            (String::new(), 0)
        );
    }

    #[test]
    fn generate_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "zebra\ncrane\napple\nabout\nslate\nirate\n");

        generate(&config).unwrap();
        let first = fs::read(&config.output).unwrap();
        generate(&config).unwrap();
        let second = fs::read(&config.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn generated_header_decodes_to_collection() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(
            dir.path(),
            "zebra\ncrane\napple\nabout\nslate\nirate\nfjord\nadieu\nquick\n",
        );

        let result = generate(&config).unwrap();
        let text = fs::read_to_string(&config.output).unwrap();
        let (buffer, count) = parse_header(&text, &config.header).unwrap();

        let decoded = unpack(&buffer, count).unwrap();
        let expected: Vec<&str> = result.filtered_words.iter().map(Word::text).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn generate_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig {
            input: dir.path().join("missing.txt"),
            output: dir.path().join(DEFAULT_OUTPUT),
            ..GenerateConfig::default()
        };

        let err = generate(&config).err().unwrap();
        assert!(err.to_string().contains("missing.txt"));
        assert!(!config.output.exists());
    }

    #[test]
    fn check_detects_stale_and_fresh_headers() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "crane\nslate\n");

        assert!(!check(&config).unwrap().up_to_date);

        generate(&config).unwrap();
        let fresh = check(&config).unwrap();
        assert!(fresh.up_to_date);
        assert_eq!(fresh.filtered_count, 2);

        fs::write(&config.input, "crane\nslate\nirate\n").unwrap();
        assert!(!check(&config).unwrap().up_to_date);
    }
}
