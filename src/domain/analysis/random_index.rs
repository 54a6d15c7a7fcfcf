//! Saaty random index table and related constants.

/// Largest judgment matrix the random index table covers.
pub const MAX_CRITERIA: usize = 15;

/// Conventional upper bound for an acceptable consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Smallest value on the Saaty fundamental scale.
pub const SAATY_SCALE_MIN: f64 = 1.0 / 9.0;

/// Largest value on the Saaty fundamental scale.
pub const SAATY_SCALE_MAX: f64 = 9.0;

/// Mean consistency index of random reciprocal matrices, indexed by `n - 1`.
pub static RANDOM_INDEX: [f64; MAX_CRITERIA] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Returns RI(n), or `None` when `n` is 0 or larger than [`MAX_CRITERIA`].
pub fn random_index(n: usize) -> Option<f64> {
    n.checked_sub(1).and_then(|i| RANDOM_INDEX.get(i)).copied()
}
