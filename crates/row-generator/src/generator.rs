//! Main row generator.

use crate::generators::draw_unit;
use crate::generators::name::select_name;
use crate::generators::numeric::truncate_percent;
use crate::row::Row;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator that produces synthetic rows from an owned RNG.
///
/// With a seeded `StdRng` the output is reproducible across runs with the
/// same seed.
pub struct RowGenerator<R = StdRng> {
    /// Random number generator, advanced twice per row
    rng: R,
    /// Number of rows produced so far
    index: u64,
}

impl RowGenerator<StdRng> {
    /// Create a generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Create a seeded generator when `seed` is set, an entropy-seeded one otherwise.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RowGenerator<R> {
    /// Create a generator over an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng, index: 0 }
    }

    /// Get the number of rows generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row.
    ///
    /// The name draw always precedes the value draw.
    pub fn next_row(&mut self) -> Row {
        let name = select_name(draw_unit(&mut self.rng));
        let value = truncate_percent(draw_unit(&mut self.rng));

        self.index += 1;

        Row::new(name, value)
    }

    /// Generate `count` rows lazily.
    pub fn rows(&mut self, count: u64) -> RowIterator<'_, R> {
        RowIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Consume the generator and return its RNG.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Iterator that lazily generates a fixed number of rows.
pub struct RowIterator<'a, R> {
    generator: &'a mut RowGenerator<R>,
    remaining: u64,
}

impl<R: Rng> Iterator for RowIterator<'_, R> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        Some(self.generator.next_row())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RowIterator<'_, R> {}
