//! Small sampling and rounding helpers shared by the generators.

use std::ops::Range;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Sample uniformly from a half-open float range.
pub fn uniform(rng: &mut impl Rng, range: Range<f64>) -> f64 {
    rng.random_range(range)
}

/// Return `true` with probability `p`.
pub fn chance(rng: &mut impl Rng, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> Option<T> {
    items.choose(rng).copied()
}

/// Round to a fixed number of decimal places for display stability.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a non-negative quantity to whole units, flooring negatives at 0.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn whole_units(value: f64) -> u32 {
    // Float-to-int `as` saturates, and the value is clamped non-negative.
    value.round().max(0.0) as u32
}
