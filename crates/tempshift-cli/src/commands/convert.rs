use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempshift_cli::{parse_temperatures, resolve_settings, CliOverrides};
use tempshift_core::config::{self, ConfigHandle};
use tempshift_core::decoders::is_supported_extension;
use tempshift_core::{kelvin, verbose_println};

/// Arguments for the convert command.
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub quality: Option<u8>,
    pub parallel: bool,
    pub threads: Option<usize>,
    pub only: Option<String>,
    pub config: Option<PathBuf>,
    pub silent: bool,
    pub verbose: bool,
}

/// Execute the convert command.
///
/// Creates the output directory, decodes the input once and writes one JPEG
/// per selected temperature. Stops at the first failure.
///
/// # Returns
/// Returns `Ok(())` on success, or an error message describing the failure.
pub fn cmd_convert(args: ConvertArgs) -> Result<(), String> {
    config::set_verbose(args.verbose);

    let handle: ConfigHandle = match &args.config {
        Some(path) => config::load_config_strict(path).map_err(|e| e.to_string())?,
        None => config::load_config(),
    };
    config::log_config_usage(&handle);

    let settings = resolve_settings(
        &CliOverrides {
            output_dir: args.output_dir,
            quality: args.quality,
            parallel: args.parallel,
            threads: args.threads,
        },
        &handle.config.defaults,
    );

    // Configure thread pool if specified
    if let Some(num_threads) = settings.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !args.silent {
            println!("Using {} threads for parallel processing", num_threads);
        }
    }

    let known_extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(is_supported_extension);
    if !known_extension {
        verbose_println!(
            "[tempshift] {} has no known image extension; detecting format from content",
            args.input.display()
        );
    }

    let entries = match &args.only {
        Some(list) => parse_temperatures(list)?,
        None => kelvin::entries().to_vec(),
    };

    if !args.silent {
        println!(
            "Converting {} at {} temperatures (JPEG quality {})...\n",
            args.input.display(),
            entries.len(),
            settings.options.jpeg_quality
        );
    }

    // Report each file as soon as it is written
    let written = AtomicUsize::new(0);
    let total = entries.len();
    let report = tempshift_core::convert_entries_with_progress(
        &args.input,
        &settings.output_dir,
        &entries,
        &settings.options,
        |artifact| {
            let count = written.fetch_add(1, Ordering::SeqCst) + 1;
            if args.silent {
                println!("{}", artifact.path.display());
            } else {
                println!(
                    "[{}/{}] {}K -> {}",
                    count,
                    total,
                    artifact.temperature,
                    artifact.path.display()
                );
            }
        },
    )
    .map_err(|e| e.to_string())?;

    if !args.silent {
        println!("\n========================================");
        println!("CONVERSION COMPLETE");
        println!("========================================");
        println!("  Source:     {}", report.source.display());
        println!("  Written:    {}", report.artifacts.len());
        println!("  Output dir: {}", report.output_dir.display());
        println!("  Total time: {:.2}s", report.elapsed.as_secs_f64());
    }

    Ok(())
}
