//! MARO: Magazine Article Range Overlapper
//!
//! Usage: maro --input <FILE> [OPTIONS]

use clap::Parser;
use std::path::PathBuf;
use std::process;

use maro::config::{Logger, PairMode, ScanConfig, ScanScope, Verbosity};
use maro::manifest::ManifestError;
use maro::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "maro")]
#[command(author = "Muhammad Zahid")]
#[command(version)]
#[command(about = "MARO: Magazine Article Range Overlapper - validate article page ranges and report overlaps", long_about = None)]
struct Cli {
    /// Input manifest file (one comma-separated list of page ranges per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for the output artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Which lines of the valid artifact feed the overlap scan
    #[arg(long, default_value = "file", value_parser = ["file", "line", "final-line"])]
    scope: String,

    /// Compare every ordered article pair, self-matches included
    #[arg(long)]
    all_pairs: bool,

    /// Show debug output
    #[arg(short, long)]
    debug: bool,

    /// Print summary statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ManifestError> {
    let scope = ScanScope::from_str(&cli.scope)
        .ok_or_else(|| ManifestError::InvalidFormat(format!("Invalid scope '{}'", cli.scope)))?;
    let pairing = if cli.all_pairs {
        PairMode::Ordered
    } else {
        PairMode::Unique
    };
    let verbosity = if cli.debug {
        Verbosity::Debug
    } else {
        Verbosity::Info
    };

    let mut logger = Logger::new(std::io::stderr(), verbosity);
    let pipeline = Pipeline::new(ScanConfig { scope, pairing });
    let stats = pipeline.run(&cli.input, &cli.output_dir, &mut logger)?;

    if cli.stats {
        logger.info(&format!("maro stats: {}", stats));
    }

    Ok(())
}
