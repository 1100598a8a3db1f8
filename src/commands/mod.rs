//! Command implementations

pub mod generate;

pub use generate::{CheckResult, GenerateConfig, GenerateResult, check, generate};
