//! Synthetic row generator for sample-csv.
//!
//! This crate provides the `RowGenerator` which produces `name,value,email`
//! records. The generator owns its random number generator, so a seeded
//! `StdRng` gives reproducible output across runs with the same seed.
//!
//! # Architecture
//!
//! ```text
//! CANDIDATE_NAMES (9 literals)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  RowGenerator   │
//! │                 │
//! │  - rng (R: Rng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Row { name, value, email }
//! ```
//!
//! # Example
//!
//! ```rust
//! use row_generator::{RowGenerator, CANDIDATE_NAMES};
//!
//! let mut generator = RowGenerator::seeded(42);
//! let row = generator.next_row();
//! assert!(CANDIDATE_NAMES.contains(&row.name.as_str()));
//! assert_eq!(row.email, format!("{}@email.com", row.name));
//! assert!(row.value < 100);
//! ```
//!
//! # Per-row draws
//!
//! Each row consumes exactly two uniform `f64` draws from the RNG, in order:
//!
//! - the name draw, mapped to an index by [`select_index`]
//! - the value draw, mapped to `[0, 100)` by [`truncate_percent`]

pub mod generator;
pub mod generators;
pub mod row;
pub mod testing;

// Re-exports for convenience
pub use generator::{RowGenerator, RowIterator};
pub use generators::name::{select_index, CANDIDATE_NAMES};
pub use generators::numeric::truncate_percent;
pub use row::{Row, EMAIL_DOMAIN};
