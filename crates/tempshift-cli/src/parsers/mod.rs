//! Parsing functions for CLI arguments.

mod input;
mod temperatures;

pub use input::parse_input_path;
pub use temperatures::parse_temperatures;
