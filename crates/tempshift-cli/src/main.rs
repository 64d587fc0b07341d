use clap::Parser;
use std::path::PathBuf;

mod commands;

use commands::{cmd_convert, cmd_list, ConvertArgs};
use tempshift_cli::parse_input_path;

#[derive(Parser)]
#[command(name = "tempshift")]
#[command(
    version,
    about = "Render an image under a fixed set of color temperatures (1000K-10000K)",
    long_about = None
)]
struct Cli {
    /// Input image (JPEG, PNG, TIFF, ...)
    #[arg(
        value_name = "INPUT",
        value_parser = parse_input_path,
        required_unless_present = "list"
    )]
    input: Option<PathBuf>,

    /// Output directory [default: ./output]
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// JPEG quality (1-100)
    #[arg(short, long, value_name = "1-100", value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Convert temperatures concurrently
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (implies --parallel)
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Only render these temperatures (comma-separated, e.g. 2000,6500)
    #[arg(long, value_name = "K,K,...")]
    only: Option<String>,

    /// Config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the temperature table and exit
    #[arg(long)]
    list: bool,

    /// Print only the paths of written files
    #[arg(short, long)]
    silent: bool,

    /// Verbose output (config source, per-temperature timings)
    #[arg(short, long, conflicts_with = "silent")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = if cli.list {
        cmd_list(cli.silent)
    } else {
        match cli.input {
            Some(input) => cmd_convert(ConvertArgs {
                input,
                output_dir: cli.output_dir,
                quality: cli.quality,
                parallel: cli.parallel,
                threads: cli.threads,
                only: cli.only,
                config: cli.config,
                silent: cli.silent,
                verbose: cli.verbose,
            }),
            None => Err("No input image specified".to_string()),
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
