//! sample-csv library
//!
//! Generates synthetic `name,value,email` rows for quick sample data sets.
//!
//! # Crates
//!
//! - `row_generator` - the seedable row generator and its selection policy
//! - `populate_csv` - writes generated rows as header-less CSV
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 rows (the default)
//! sample-csv
//!
//! # 5 rows, reproducible
//! sample-csv -ub=5 --seed=42
//!
//! # Rows per age
//! sample-csv -ub=1000 | age-distribution
//! ```

pub mod cli;
pub mod distribution;
pub mod logging;

pub use cli::{normalize_args, Cli};
pub use distribution::{AgeDistribution, DistributionError};
