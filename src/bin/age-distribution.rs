//! Count rows per age in header-less `name,age,email` CSV.
//!
//! ```bash
//! sample-csv -ub=1000 | age-distribution
//! ```

use anyhow::Context;
use sample_csv::{logging, AgeDistribution};

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    logging::init();

    let distribution = AgeDistribution::read_from(std::io::stdin().lock())
        .context("Failed to read rows from stdin")?;

    tracing::info!(
        "Counted {} rows across {} ages",
        distribution.total(),
        distribution.len()
    );

    distribution
        .write_to(std::io::stdout().lock())
        .context("Failed to write distribution to stdout")?;

    Ok(())
}
