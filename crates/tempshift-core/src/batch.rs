//! Batch conversion over the Kelvin table
//!
//! Decodes one source image and writes one JPEG per table entry, named
//! `<stem>_temp<kelvin>.jpg`, into a flat output directory.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use image::RgbImage;
use rayon::prelude::*;

use crate::decoders::decode_image;
use crate::error::{ConvertError, Result};
use crate::exporters::{export_jpeg, DEFAULT_JPEG_QUALITY};
use crate::kelvin::{self, KelvinEntry};
use crate::transform::apply_multiplier;
use crate::verbose_println;

/// Options shared by every entry in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Convert entries concurrently on the rayon pool
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            parallel: false,
        }
    }
}

/// One written output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub temperature: u32,
    pub path: PathBuf,
}

/// Summary of a successful batch
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Written files, in table order
    pub artifacts: Vec<OutputArtifact>,
    pub elapsed: Duration,
}

/// File name for one converted variant: `<stem>_temp<temperature>.jpg`
///
/// The stem is kept as raw OS bytes, so names that are not valid UTF-8
/// come through unchanged.
pub fn output_file_name(stem: &OsStr, temperature: u32) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_temp{}.jpg", temperature));
    name
}

/// Source file name without its final extension
pub fn source_stem(path: &Path) -> Result<OsString> {
    path.file_stem()
        .map(OsStr::to_os_string)
        .ok_or_else(|| ConvertError::invalid_input(path, "invalid input filename"))
}

/// Create the output directory and any missing parents
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::Configuration {
        path: dir.to_path_buf(),
        source,
    })
}

/// Convert `input` once for every Kelvin table entry
///
/// The output directory is created first and the source is decoded once
/// before any transform runs. The first failed write aborts the batch;
/// files written before it are left in place.
pub fn convert_all(input: &Path, output_dir: &Path, options: &BatchOptions) -> Result<BatchReport> {
    convert_entries(input, output_dir, kelvin::entries(), options)
}

/// Convert `input` for a chosen subset of table entries
pub fn convert_entries(
    input: &Path,
    output_dir: &Path,
    entries: &[KelvinEntry],
    options: &BatchOptions,
) -> Result<BatchReport> {
    convert_entries_with_progress(input, output_dir, entries, options, |_| {})
}

/// Like [`convert_entries`], calling `on_written` as soon as each file is on
/// disk.
///
/// In parallel mode the callback runs on rayon workers, so calls arrive in
/// completion order rather than table order. Entries written before a
/// failure have already been reported when the error is returned.
pub fn convert_entries_with_progress<F>(
    input: &Path,
    output_dir: &Path,
    entries: &[KelvinEntry],
    options: &BatchOptions,
    on_written: F,
) -> Result<BatchReport>
where
    F: Fn(&OutputArtifact) + Sync,
{
    let start = Instant::now();

    prepare_output_dir(output_dir)?;

    let source = decode_image(input)?;
    let stem = source_stem(input)?;

    let artifacts = if options.parallel {
        entries
            .par_iter()
            .map(|entry| {
                convert_entry(&source, &stem, output_dir, entry, options, &on_written)
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        entries
            .iter()
            .map(|entry| {
                convert_entry(&source, &stem, output_dir, entry, options, &on_written)
            })
            .collect::<Result<Vec<_>>>()?
    };

    Ok(BatchReport {
        source: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        artifacts,
        elapsed: start.elapsed(),
    })
}

fn convert_entry<F>(
    source: &RgbImage,
    stem: &OsStr,
    output_dir: &Path,
    entry: &KelvinEntry,
    options: &BatchOptions,
    on_written: &F,
) -> Result<OutputArtifact>
where
    F: Fn(&OutputArtifact) + Sync,
{
    let entry_start = Instant::now();

    let converted = apply_multiplier(source, entry.multiplier);
    let path = output_dir.join(output_file_name(stem, entry.temperature));
    export_jpeg(&converted, &path, options.jpeg_quality)?;

    verbose_println!(
        "[tempshift] {}K -> {} ({:.1}ms)",
        entry.temperature,
        path.display(),
        entry_start.elapsed().as_secs_f64() * 1000.0
    );

    let artifact = OutputArtifact {
        temperature: entry.temperature,
        path,
    };
    on_written(&artifact);
    Ok(artifact)
}
