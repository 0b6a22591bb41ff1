//! Field generators for a row.
//!
//! Each function maps one uniform draw in `[0, 1)` to a field value. They are
//! kept free of any RNG so the mapping can be checked with exact inputs.

pub mod name;
pub mod numeric;

use rand::Rng;

/// Draw a uniform `f64` in `[0, 1)`.
pub fn draw_unit<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}
