//! Command-line interface for sample-csv
//!
//! # Usage Examples
//!
//! ```bash
//! # Default row count (100)
//! sample-csv
//!
//! # Explicit row count; only the first -ub= is honored
//! sample-csv -ub=5
//!
//! # Reproducible output
//! sample-csv -ub=5 --seed=42
//!
//! # Progress and summary logs on stderr
//! RUST_LOG=info sample-csv -ub=100000 > people.csv
//! ```

use anyhow::Context;
use populate_csv::CsvPopulator;
use row_generator::RowGenerator;
use sample_csv::{logging, Cli};

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse_raw(std::env::args_os());
    let args = cli.populate;

    tracing::info!(
        "Populating stdout with {} rows (seed={:?})",
        args.upper_bound,
        args.seed
    );

    let mut populator = CsvPopulator::new(RowGenerator::with_optional_seed(args.seed));
    let stdout = std::io::stdout().lock();
    populator
        .populate(stdout, args.upper_bound)
        .context("Failed to write rows to stdout")?;

    Ok(())
}
