//! Command-line parsing for `sample-csv`.
//!
//! The historical interface takes the row count as a single-dash `-ub=<N>`
//! token and ignores everything it does not recognize, help flags included.
//! Clap has no notion of single-dash long options or of dropping unknown
//! arguments, so the raw arguments go through [`normalize_args`] first and
//! clap only ever sees canonical long options.
//!
//! Only `=`-joined forms are recognized. A bare flag never consumes the
//! following token, so it cannot swallow a `-ub=` argument.

use clap::Parser;
use populate_csv::PopulateArgs;
use std::ffi::OsString;

const PROGRAM_NAME: &str = "sample-csv";

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(about = "Generate synthetic name,value,email rows as CSV on stdout")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub populate: PopulateArgs,
}

impl Cli {
    /// Parse raw process arguments, exiting with clap's report on failure.
    pub fn parse_raw<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Parse raw process arguments, returning clap's error on failure.
    pub fn try_parse_raw<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite raw arguments into the canonical form clap understands.
///
/// - the first `-ub=<N>` (or `--ub=<N>`) sets the row count
/// - the first `--seed=<S>` sets the seed
/// - later repeats and every other token are dropped
///
/// The first element is kept as the program name.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = args
        .into_iter()
        .map(|arg| arg.into().to_string_lossy().into_owned());

    let program = raw.next().unwrap_or_else(|| PROGRAM_NAME.to_string());

    let mut upper_bound: Option<String> = None;
    let mut seed: Option<String> = None;

    for arg in raw {
        if let Some(value) = arg
            .strip_prefix("-ub=")
            .or_else(|| arg.strip_prefix("--ub="))
        {
            keep_first(&mut upper_bound, value.to_string());
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            keep_first(&mut seed, value.to_string());
        }
    }

    let mut normalized = vec![OsString::from(program)];
    if let Some(value) = upper_bound {
        normalized.push(format!("--ub={value}").into());
    }
    if let Some(value) = seed {
        normalized.push(format!("--seed={value}").into());
    }
    normalized
}

fn keep_first(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        *slot = Some(value);
    }
}
