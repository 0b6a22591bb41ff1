//! Age distribution over generated rows.
//!
//! Sample files feed a batch job that loads `name,age,email` records and
//! reports how many people share each age. [`AgeDistribution`] is that
//! report: it reads header-less rows and writes one `age,count` line per
//! distinct age, ascending.

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use row_generator::Row;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building or writing a distribution.
#[derive(Error, Debug)]
pub enum DistributionError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input record or failed output write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One output line of the report.
#[derive(Debug, Serialize)]
struct AgeCount {
    age: u32,
    count: u64,
}

/// Count of rows per age value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeDistribution {
    counts: BTreeMap<u32, u64>,
}

impl AgeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one row with the given age.
    pub fn record(&mut self, age: u32) {
        *self.counts.entry(age).or_insert(0) += 1;
    }

    /// Build a distribution from header-less `name,age,email` CSV.
    pub fn read_from<R: Read>(input: R) -> Result<Self, DistributionError> {
        let mut reader = ReaderBuilder::new().has_headers(false).from_reader(input);
        let mut distribution = Self::new();

        for record in reader.deserialize::<Row>() {
            let row = record?;
            distribution.record(row.value);
        }

        debug!(
            "Read {} rows across {} ages",
            distribution.total(),
            distribution.counts.len()
        );

        Ok(distribution)
    }

    /// Write one `age,count` line per age, ascending by age.
    pub fn write_to<W: Write>(&self, output: W) -> Result<(), DistributionError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);

        for (age, count) in self.iter() {
            writer.serialize(AgeCount { age, count })?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Number of rows with `age`.
    pub fn count(&self, age: u32) -> u64 {
        self.counts.get(&age).copied().unwrap_or(0)
    }

    /// Total number of rows counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct ages seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(age, count)` pairs in ascending age order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&age, &count)| (age, count))
    }
}
