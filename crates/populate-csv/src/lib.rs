//! CSV populator for sample rows.
//!
//! This crate writes rows produced by the row-generator crate as
//! header-less `name,value,email` CSV to any `std::io::Write`.
//!
//! # Example
//!
//! ```rust
//! use populate_csv::CsvPopulator;
//! use row_generator::RowGenerator;
//!
//! let mut populator = CsvPopulator::new(RowGenerator::seeded(42));
//! let mut out = Vec::new();
//! let metrics = populator.populate(&mut out, 3).unwrap();
//!
//! assert_eq!(metrics.rows_written, 3);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{PopulateArgs, DEFAULT_UPPER_BOUND};
pub use error::PopulateError;
pub use populator::{CsvPopulator, PopulateMetrics};
