//! Settings resolution: command line over config file over built-in defaults.

use std::path::PathBuf;

use tempshift_core::config::ConverterDefaults;
use tempshift_core::exporters::clamp_quality;
use tempshift_core::BatchOptions;

/// Values given on the command line; `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub quality: Option<u8>,
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub options: BatchOptions,
    /// Size of the global rayon pool, if one was requested
    pub threads: Option<usize>,
}

/// Merge command line overrides with config defaults.
///
/// Requesting a thread count turns on parallel conversion.
pub fn resolve_settings(overrides: &CliOverrides, defaults: &ConverterDefaults) -> Settings {
    let threads = overrides
        .threads
        .filter(|&n| n > 0)
        .or(defaults.threads);
    let parallel = overrides.parallel || overrides.threads.is_some() || defaults.parallel;

    Settings {
        output_dir: overrides
            .output_dir
            .clone()
            .unwrap_or_else(|| defaults.output_dir.clone()),
        options: BatchOptions {
            jpeg_quality: clamp_quality(overrides.quality.unwrap_or(defaults.jpeg_quality)),
            parallel,
        },
        threads: if parallel { threads } else { None },
    }
}
