//! The Pauli basis and operations on $`2\times 2`$ unitary matrices:
//! decomposition into Pauli-basis coefficients plus a global phase, and
//! phase-aware spherical interpolation.

use nalgebra::Quaternion;
use ndarray::{array, Array2};
use num_complex::Complex;

use crate::trig;


/// Imaginary residues beyond this, left over after cancelling the extracted
/// phase, indicate that the input to [`unitary_breakdown`] was not unitary.
const NONUNITARY_RESIDUE_THRESHOLD: f64 = 1e-8;

/// A unitary broken into real coefficients $`(t, x, y, z)`$ on the
/// $`(\mathsf{I}, \mathsf{X}, \mathsf{Y}, \mathsf{Z})`$ basis together with
/// the extracted unit phase factor $`p`$, so that the original matrix is
/// $`p\,(t\mathsf{I} + x\mathsf{X} + y\mathsf{Y} + z\mathsf{Z})`$.
pub type PauliBreakdown = (f64, f64, f64, f64, Complex<f64>);

/// Returns the Pauli matrix $`\mathsf{X}`$.
#[must_use]
pub fn pauli_x() -> Array2<Complex<f64>> {
    array![
        [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
        [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    ]
}

/// Returns the Pauli matrix $`\mathsf{Y}`$.
#[must_use]
pub fn pauli_y() -> Array2<Complex<f64>> {
    array![
        [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
        [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
    ]
}

/// Returns the Pauli matrix $`\mathsf{Z}`$.
#[must_use]
pub fn pauli_z() -> Array2<Complex<f64>> {
    array![
        [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
        [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
    ]
}

/// Breaks a $`2\times 2`$ unitary matrix into its Pauli-basis coefficients
/// and a global phase.
///
/// # Arguments
///
/// * `m` - The matrix to break down. It must be unitary: no validation is
///   performed, and for non-unitary input the imaginary parts silently
///   discarded below are no longer mere floating noise (a warning is logged
///   when that happens, but the caller must treat it as a contract violation
///   rather than a detected error).
///
/// # Returns
///
/// The tuple $`(t, x, y, z, p)`$ with $`p`$ of unit modulus, the four
/// coefficients real, and
/// $`m = p\,(t\mathsf{I} + x\mathsf{X} + y\mathsf{Y} + z\mathsf{Z})`$.
#[must_use]
pub fn unitary_breakdown(m: &Array2<Complex<f64>>) -> PauliBreakdown {
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
    let t = (a + d) / Complex::new(0.0, 2.0);
    let x = (b + c) / 2.0;
    let y = (b - c) / Complex::new(0.0, -2.0);
    let z = (a - d) / 2.0;

    // The phase is cancelled against the coefficient of largest magnitude;
    // ties keep the earliest of (t, x, y, z), so the scan must be
    // strictly-greater rather than `max_by_key`, which keeps the last.
    let mut p = t;
    for candidate in [x, y, z] {
        if candidate.norm_sqr() > p.norm_sqr() {
            p = candidate;
        }
    }
    p /= p.norm();

    let (t, x, y, z) = (t / p, x / p, y / p, z / p);

    let residue = t.im.abs() + x.im.abs() + y.im.abs() + z.im.abs();
    if residue > NONUNITARY_RESIDUE_THRESHOLD {
        log::warn!(
            "Phase-cancelled Pauli coefficients retain an imaginary residue of {residue:.3e}; \
             the input matrix is unlikely to be unitary."
        );
    }

    (t.re, x.re, y.re, z.re, p)
}

/// Continuously interpolates between two $`2\times 2`$ unitary matrices,
/// with unitary intermediates.
///
/// # Arguments
///
/// * `u1` - The initial unitary operation, used at `t = 0`.
/// * `u2` - The final unitary operation, used at `t = 1`.
/// * `t` - The interpolation fraction, ranging from 0 to 1.
///
/// # Returns
///
/// A unitary that varies continuously with `t`. The rotation parts of the
/// two operands are interpolated spherically after choosing, of the two
/// antipodal representatives the double cover offers for `u2`, the one
/// closer to `u1`; the phases are interpolated separately along the shorter
/// arc between them. Interpolating a matrix with itself returns it
/// unchanged for every `t`.
#[must_use]
pub fn unitary_lerp(
    u1: &Array2<Complex<f64>>,
    u2: &Array2<Complex<f64>>,
    t: f64,
) -> Array2<Complex<f64>> {
    let (t1, x1, y1, z1, p1) = unitary_breakdown(u1);
    let (t2, x2, y2, z2, mut p2) = unitary_breakdown(u2);
    let n1 = u1 / p1;
    let mut n2 = u2 / p2;

    let mut dot = Quaternion::new(t1, x1, y1, z1).dot(&Quaternion::new(t2, x2, y2, z2));
    if dot < 0.0 {
        p2 = -p2;
        n2 = -n2;
        dot = -dot;
    }

    // Spherical interpolation of the rotation parts.
    let theta = trig::acos(dot.clamp(-1.0, 1.0));
    let c1 = trig::sin_scale_ratio(theta, 1.0 - t);
    let c2 = trig::sin_scale_ratio(theta, t);
    let n3 = n1 * Complex::from(c1) + n2 * Complex::from(c2);

    // Angular interpolation of the phase parts, in radians, wrapping the
    // drift into [-pi, pi) so the phase follows the shorter arc.
    let phase_angle_1 = p1.arg();
    let phase_angle_2 = p2.arg();
    let phase_drift =
        (phase_angle_2 - phase_angle_1 + std::f64::consts::PI).rem_euclid(trig::TAU)
            - std::f64::consts::PI;
    let p3 = Complex::from_polar(1.0, phase_angle_1 + phase_drift * t);

    n3 * p3
}
