//! Terminal output formatting
//!
//! Operator-facing reports for the generator.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_generate_result};
