//! Builder functions for converter settings.

mod settings;

pub use settings::{resolve_settings, CliOverrides, Settings};
