use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ConvertError, Result};
use crate::exporters::{clamp_quality, DEFAULT_JPEG_QUALITY};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Candidate config file names searched for on disk.
const CONFIG_FILENAMES: &[&str] = &["tempshift.yml", "tempshift.yaml"];

/// Loaded configuration together with where it came from.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: ConverterConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(
        config: ConverterConfig,
        source: Option<PathBuf>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConverterConfig {
    pub defaults: ConverterDefaults,
}

impl ConverterConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }
}

/// Defaults applied when the command line does not override them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConverterDefaults {
    /// Directory that receives the converted images
    pub output_dir: PathBuf,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Convert table entries concurrently
    pub parallel: bool,
    /// Worker threads for parallel conversion (None = rayon default)
    pub threads: Option<usize>,
}

impl Default for ConverterDefaults {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./output"),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            parallel: false,
            threads: None,
        }
    }
}

impl ConverterDefaults {
    fn sanitize(&mut self) {
        self.jpeg_quality = clamp_quality(self.jpeg_quality);
        if self.threads == Some(0) {
            self.threads = None;
        }
        if self.output_dir.as_os_str().is_empty() {
            self.output_dir = ConverterDefaults::default().output_dir;
        }
    }
}

/// Parse configuration from YAML text.
pub fn parse_config(contents: &str) -> std::result::Result<ConverterConfig, serde_yaml::Error> {
    serde_yaml::from_str::<ConverterConfig>(contents).map(ConverterConfig::sanitize)
}

/// Load configuration from the working directory or the user's home.
///
/// Unreadable or malformed candidates are skipped and noted in `warnings`.
/// Falls back to built-in defaults when nothing is found. An explicit
/// `--config` file goes through [`load_config_strict`] instead.
pub fn load_config() -> ConfigHandle {
    load_first_candidate(config_candidates())
}

fn load_first_candidate(candidates: Vec<PathBuf>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config found; using built-in defaults.".to_string());
    ConfigHandle::with_config(ConverterConfig::default(), None, warnings)
}

/// Load configuration from an explicitly requested file.
///
/// Unlike [`load_config`], a missing or invalid file is an error.
pub fn load_config_strict(path: &Path) -> Result<ConfigHandle> {
    let contents = fs::read_to_string(path).map_err(|e| ConvertError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config = parse_config(&contents).map_err(|e| ConvertError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let source = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(ConfigHandle::with_config(config, Some(source), Vec::new()))
}

/// Config file candidates in priority order
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("tempshift").join(name));
        }
    }

    candidates
}

/// Print config source and warnings (only in verbose mode).
pub fn log_config_usage(handle: &ConfigHandle) {
    if !is_verbose() {
        return;
    }
    if let Some(source) = &handle.source {
        eprintln!("[tempshift] Loaded config from {}", source.display());
    } else {
        eprintln!("[tempshift] Using built-in defaults");
    }

    for warning in &handle.warnings {
        eprintln!("[tempshift] Config warning: {}", warning);
    }
}
