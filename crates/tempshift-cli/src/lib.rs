//! Shared utilities for tempshift-cli
//!
//! Argument parsing and settings resolution, kept out of the binary so they
//! can be tested on their own.

pub mod builders;
pub mod parsers;

// Re-export commonly used items at the crate root for convenience
pub use builders::{resolve_settings, CliOverrides, Settings};
pub use parsers::{parse_input_path, parse_temperatures};
