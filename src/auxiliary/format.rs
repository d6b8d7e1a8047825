//! Formatting helpers for human-readable rotation descriptions.

use num_traits::Zero;

type F = fraction::GenericFraction<u32>;

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;

/// Renders a number of turns as text, using vulgar fraction glyphs for the
/// exact quarter-turn multiples `0`, `¼`, `½` and `¾` and falling back to the
/// plain decimal representation otherwise.
///
/// Negative values render as the negated value prefixed with `-`.
pub(crate) fn write_turn_fraction(v: f64) -> String {
    if v < 0.0 {
        return format!("-{}", write_turn_fraction(-v));
    }
    match exact_quarter(v) {
        Some(frac) if frac.is_zero() => "0".to_string(),
        Some(frac) if frac == F::new(1u32, 4u32) => "¼".to_string(),
        Some(frac) if frac == F::new(1u32, 2u32) => "½".to_string(),
        Some(frac) if frac == F::new(3u32, 4u32) => "¾".to_string(),
        _ => v.to_string(),
    }
}

/// Expresses a non-negative `v` as an exact fraction in quarters, if it is
/// one; the fraction is reduced on construction, so `2/4` compares equal to
/// `1/2`.
fn exact_quarter(v: f64) -> Option<F> {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters <= f64::from(u32::MAX) {
        Some(F::new(quarters as u32, 4u32))
    } else {
        None
    }
}
