//! Core domain types for the word list
//!
//! This module contains the fundamental domain types with no I/O.

mod word;

pub use word::{WORD_LEN, Word, WordError};
