//! Name selection from the fixed candidate list.

/// The pool every generated name is drawn from.
pub const CANDIDATE_NAMES: [&str; 9] = [
    "josh", "jane", "bob", "patrick", "jennifer", "tammy", "lois", "george", "jimmy",
];

/// Map a uniform draw `r` in `[0, 1)` to an index into a list of `len` items.
///
/// The draw is scaled by `len`, rounded to the nearest integer (halves away
/// from zero) and clamped to `len - 1`. This is not a uniform pick: the first
/// index receives half a bucket of probability mass and the last index one and
/// a half buckets. Existing data sets depend on this exact mapping.
///
/// `len` must be non-zero for the result to be a valid index.
pub fn select_index(r: f64, len: usize) -> usize {
    let scaled = (r * len as f64).round() as usize;
    scaled.min(len.saturating_sub(1))
}

/// Pick a candidate name for the draw `r`.
pub fn select_name(r: f64) -> &'static str {
    CANDIDATE_NAMES[select_index(r, CANDIDATE_NAMES.len())]
}
