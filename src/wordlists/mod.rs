//! Word list preparation
//!
//! Loading the master list and reducing it to the collection stored on the device.

pub mod filter;
pub mod loader;

pub use filter::{build_collection, filter_unique_letters, sort_words};
