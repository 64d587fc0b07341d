//! Tempshift Core Library
//!
//! Renders an image under a fixed table of color temperatures, from 1000K
//! candlelight to 10000K blue sky, writing one JPEG per temperature.

pub mod batch;
pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod kelvin;
pub mod transform;

// Re-export commonly used types
pub use batch::{
    convert_all, convert_entries, convert_entries_with_progress, BatchOptions, BatchReport,
    OutputArtifact,
};
pub use error::{ConvertError, Result};
pub use kelvin::{KelvinEntry, Multiplier};
