//! CSV populator for sample rows.

use crate::error::PopulateError;
use csv::{Terminator, Writer, WriterBuilder};
use rand::Rng;
use row_generator::RowGenerator;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Bytes handed to the output writer.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that writes generated rows as header-less CSV.
pub struct CsvPopulator<R> {
    generator: RowGenerator<R>,
}

impl<R: Rng> CsvPopulator<R> {
    /// Create a new CSV populator around a row generator.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let populator = CsvPopulator::new(RowGenerator::seeded(42));
    /// ```
    pub fn new(generator: RowGenerator<R>) -> Self {
        Self { generator }
    }

    /// Get the number of rows generated so far.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Write `count` rows to `output`.
    ///
    /// Each row becomes one `name,value,email` line terminated by `\n`. The
    /// output is flushed before returning.
    pub fn populate<W: Write>(
        &mut self,
        output: W,
        count: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!("Generating {} rows", count);

        let counting = CountingWriter::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, output));
        let mut writer = row_writer(counting);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let row = self.generator.next_row();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.serialize(&row)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        let write_start = Instant::now();
        writer.flush()?;
        let counting = writer
            .into_inner()
            .map_err(|e| PopulateError::Io(io::Error::other(e.to_string())))?;
        write_time += write_start.elapsed();

        metrics.bytes_written = counting.bytes_written();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec, {:.2} bytes/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.bytes_per_second()
        );

        Ok(metrics)
    }
}

/// Build a CSV writer without a header row and with `\n` line endings.
fn row_writer<W: Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output)
}

/// Writer adapter that counts the bytes accepted by the inner writer.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use row_generator::testing::ScriptedRng;
    use row_generator::CANDIDATE_NAMES;

    fn populate_to_string<R: Rng>(populator: &mut CsvPopulator<R>, count: u64) -> String {
        let mut out = Vec::new();
        populator.populate(&mut out, count).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            bytes_written: 100000,
            total_duration: Duration::from_secs(10),
            generation_duration: Duration::from_secs(2),
            write_duration: Duration::from_secs(8),
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
    }

    #[test]
    fn test_metrics_zero_duration() {
        let metrics = PopulateMetrics::default();

        assert_eq!(metrics.rows_per_second(), 0.0);
        assert_eq!(metrics.bytes_per_second(), 0.0);
    }

    #[test]
    fn test_golden_output() {
        let rng = ScriptedRng::new(&[
            0.0, 0.5, 0.5, 0.25, 0.9375, 0.75, 0.99609375, 0.99609375, 0.125, 0.0,
        ]);
        let mut populator = CsvPopulator::new(RowGenerator::new(rng));

        let content = populate_to_string(&mut populator, 5);

        assert_eq!(
            content,
            "josh,50,josh@email.com\n\
             tammy,25,tammy@email.com\n\
             jimmy,75,jimmy@email.com\n\
             jimmy,99,jimmy@email.com\n\
             jane,0,jane@email.com\n"
        );
    }

    #[test]
    fn test_populate_line_format() {
        let mut populator = CsvPopulator::new(RowGenerator::seeded(42));

        let content = populate_to_string(&mut populator, 250);
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 250);
        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 3, "line {line:?}");
            assert!(CANDIDATE_NAMES.contains(&fields[0]));
            let value: u32 = fields[1].parse().unwrap();
            assert!(value < 100);
            assert_eq!(fields[2], format!("{}@email.com", fields[0]));
        }
    }

    #[test]
    fn test_populate_zero_rows() {
        let mut populator = CsvPopulator::new(RowGenerator::seeded(42));
        let mut out = Vec::new();

        let metrics = populator.populate(&mut out, 0).unwrap();

        assert!(out.is_empty());
        assert_eq!(metrics.rows_written, 0);
        assert_eq!(metrics.bytes_written, 0);
    }

    #[test]
    fn test_bytes_written_matches_output() {
        let mut populator = CsvPopulator::new(RowGenerator::seeded(7));
        let mut out = Vec::new();

        let metrics = populator.populate(&mut out, 20).unwrap();

        assert_eq!(metrics.rows_written, 20);
        assert_eq!(metrics.bytes_written, out.len() as u64);
        assert_eq!(populator.current_index(), 20);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut pop1 = CsvPopulator::new(RowGenerator::seeded(42));
        let mut pop2 = CsvPopulator::new(RowGenerator::seeded(42));

        assert_eq!(
            populate_to_string(&mut pop1, 5),
            populate_to_string(&mut pop2, 5)
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let mut populator = CsvPopulator::new(RowGenerator::seeded(42));

        assert!(populator.populate(FailingWriter, 3).is_err());
    }
}
