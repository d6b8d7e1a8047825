//! Trigonometry in fractions of a full turn.
//!
//! Every angle in this crate is a number of *turns*, where `1.0` is a full
//! revolution. The functions here wrap the standard radian implementations
//! with one refinement: arguments are first reduced modulo one turn, and
//! exact multiples of a quarter turn yield the exact values $`0`$, $`\pm 1`$.
//! Radian trigonometry only approximates these (e.g. `f64::cos` of a quarter
//! turn is $`\sim 10^{-17}`$ rather than zero), and the approximation error
//! would otherwise leak into gate matrices that are algebraically exact.

use num_complex::Complex;

#[cfg(test)]
#[path = "trig_tests.rs"]
mod trig_tests;

/// One full turn, in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Returns the sine of an angle given in turns.
///
/// Exact multiples of a quarter turn give exact results.
#[must_use]
pub fn sin(turns: f64) -> f64 {
    let t = turns.rem_euclid(1.0);
    if t == 0.0 || t == 0.5 {
        0.0
    } else if t == 0.25 {
        1.0
    } else if t == 0.75 {
        -1.0
    } else {
        (t * TAU).sin()
    }
}

/// Returns the cosine of an angle given in turns.
///
/// Exact multiples of a quarter turn give exact results.
#[must_use]
pub fn cos(turns: f64) -> f64 {
    let t = turns.rem_euclid(1.0);
    if t == 0.0 {
        1.0
    } else if t == 0.5 {
        -1.0
    } else if t == 0.25 || t == 0.75 {
        0.0
    } else {
        (t * TAU).cos()
    }
}

/// Returns the angle of the point $`(x, y)`$, in turns.
///
/// # Arguments
///
/// * `y` - The ordinate of the point.
/// * `x` - The abscissa of the point.
///
/// # Returns
///
/// The angle in the half-open interval $`(-1/2, 1/2]`$ turns.
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x) / TAU
}

/// Returns the inverse cosine of `v`, in turns, in the interval $`[0, 1/2]`$.
#[must_use]
pub fn acos(v: f64) -> f64 {
    v.acos() / TAU
}

/// Returns the unit complex number at the given angle in turns,
/// $`\cos\theta + \mathrm{i}\sin\theta`$.
#[must_use]
pub fn expi(turns: f64) -> Complex<f64> {
    Complex::new(cos(turns), sin(turns))
}

/// Returns $`\sin\theta / \theta`$ for an angle $`\theta`$ in turns, with the
/// removable singularity at zero filled in by the limit $`\tau`$.
///
/// Note the limit: the numerator is a turns-based sine but the denominator is
/// a raw turn count, so the ratio tends to $`\tau`$, not $`1`$, as
/// $`\theta \to 0`$.
#[must_use]
pub fn sinc(turns: f64) -> f64 {
    if turns == 0.0 {
        TAU
    } else {
        sin(turns) / turns
    }
}

/// Returns the ratio $`\sin(\theta f) / \sin\theta`$ used as a spherical
/// interpolation weight.
///
/// # Arguments
///
/// * `theta` - The full angle between the interpolation endpoints, in turns.
/// * `fraction` - The interpolation fraction $`f`$.
///
/// # Returns
///
/// The weight, which tends to `fraction` as `theta` tends to zero; that limit
/// is returned whenever $`\sin\theta`$ vanishes, so that interpolation
/// between coincident endpoints degenerates to ordinary linear weights.
#[must_use]
pub fn sin_scale_ratio(theta: f64, fraction: f64) -> f64 {
    let s = sin(theta);
    if s == 0.0 {
        fraction
    } else {
        sin(theta * fraction) / s
    }
}

/// Snaps `turns` to the nearest multiple of a quarter turn when it lies
/// within $`10^{-6}`$ of one, and returns it unchanged otherwise.
///
/// Round trips through radian trigonometry leave residues of order
/// $`10^{-16}`$ on angles that are algebraically exact quarter-turn
/// multiples; this removes them so that downstream exact comparisons and
/// canonical forms see the intended values.
#[must_use]
pub fn smooth_near_quarter_turn(turns: f64) -> f64 {
    let err = (turns - 0.125).rem_euclid(0.25) - 0.125;
    if err.abs() < 1e-6 {
        (turns * 4.0).round() / 4.0
    } else {
        turns
    }
}
