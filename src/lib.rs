//! Word Pack
//!
//! Build-time generator for the word list of an embedded Wordle game. Keeps the
//! 5-letter words with no repeated letters, sorts them, and writes them as one
//! packed `PROGMEM` string in a C header.
//!
//! # Quick Start
//!
//! ```rust
//! use word_pack::header::{HeaderConfig, pack::packed_buffer, render_header};
//! use word_pack::wordlists::{build_collection, loader::words_from_lines};
//!
//! let words = words_from_lines("apple\ncrane\nberry\nabcde\n");
//! let collection = build_collection(&words);
//!
//! assert_eq!(packed_buffer(&collection), "ABCDECRANE");
//! let header = render_header(&collection, &HeaderConfig::default());
//! assert!(header.contains("const int WORD_COUNT = 2;"));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Header rendering and packed buffer decoding
pub mod header;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
