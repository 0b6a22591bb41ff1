//! CLI argument definitions for the populator.

use clap::Args;

/// Row count used when no upper bound is given.
pub const DEFAULT_UPPER_BOUND: u64 = 100;

/// Arguments controlling a populate run.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Number of rows to generate (also accepted as -ub=<N>)
    #[arg(long = "ub", value_name = "N", default_value_t = DEFAULT_UPPER_BOUND)]
    pub upper_bound: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}
