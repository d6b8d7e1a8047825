//! Rotations of three-dimensional space, measured in fractions of a turn.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use nalgebra::{Quaternion, Vector3};
use ndarray::Array2;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::auxiliary::format::write_turn_fraction;
use crate::auxiliary::misc::HashableFloat;
use crate::trig;
use crate::unitary::{pauli_x, pauli_y, pauli_z};


/// Axes shorter than this are treated as degenerate: such a rotation has no
/// meaningful direction and [`Rotation::axis`] returns the zero vector.
const DEGENERATE_AXIS_THRESHOLD: f64 = 1e-7;

/// Below this turn count, [`Rotation::as_quaternion`] returns the identity
/// quaternion directly instead of dividing by the turn count.
const IDENTITY_TURN_THRESHOLD: f64 = 1e-6;

/// Below this turn count, [`Rotation::as_pauli_operation`] switches to a
/// division-free form for the Pauli-term coefficient.
const SMALL_TURN_THRESHOLD: f64 = 1e-3;

/// A rotation about some axis, represented as a rotation vector.
///
/// The components are signed numbers of turns about the three Cartesian axes:
/// the direction of $`(x, y, z)`$ is the rotation axis and its Euclidean norm
/// is the rotation angle, with `1.0` being a full revolution. The zero vector
/// denotes no rotation at all.
///
/// Distinct component triples can describe the same physical rotation, both
/// through full-turn periodicity and through the simultaneous sign flip of
/// axis and angle inherited from the double cover of $`\mathsf{SO}(3)`$.
/// [`PartialEq`] and [`Hash`] operate on a canonical form that identifies all
/// such aliases; the stored components themselves always remain exactly as
/// constructed.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// The number of turns about the $`x`$-axis.
    pub x: f64,

    /// The number of turns about the $`y`$-axis.
    pub y: f64,

    /// The number of turns about the $`z`$-axis.
    pub z: f64,
}

impl Rotation {
    /// Constructs a rotation from its three turn-count components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Constructs a rotation by `turns` about the $`x`$-axis.
    #[must_use]
    pub fn about_x(turns: f64) -> Self {
        Self::new(turns, 0.0, 0.0)
    }

    /// Constructs a rotation by `turns` about the $`y`$-axis.
    #[must_use]
    pub fn about_y(turns: f64) -> Self {
        Self::new(0.0, turns, 0.0)
    }

    /// Constructs a rotation by `turns` about the $`z`$-axis.
    #[must_use]
    pub fn about_z(turns: f64) -> Self {
        Self::new(0.0, 0.0, turns)
    }

    /// Returns the components as a vector.
    fn vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the amount of turning this rotation performs, in full turns,
    /// so that a quarter turn gives `0.25`.
    ///
    /// The result is non-negative, and zero exactly when all three components
    /// are zero.
    #[must_use]
    pub fn turns(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns a unit vector along the axis this rotation rotates around, or
    /// the zero vector if the rotation is too short to define one.
    #[must_use]
    pub fn axis(&self) -> Vector3<f64> {
        let length = self.turns();
        if length < DEGENERATE_AXIS_THRESHOLD {
            Vector3::zeros()
        } else {
            self.vector() / length
        }
    }

    /// Returns the net rotation from applying this rotation and then
    /// `following`.
    ///
    /// Composition goes through the quaternion representation, so the result
    /// carries the usual floating drift of a quaternion product; drift near
    /// quarter-turn multiples is removed by [`Rotation::from_quaternion`].
    #[must_use]
    pub fn then(&self, following: &Rotation) -> Rotation {
        Rotation::from_quaternion(following.as_quaternion() * self.as_quaternion())
    }

    /// Returns the unit quaternion corresponding to this rotation.
    ///
    /// A rotation by $`t`$ turns about the unit axis $`\hat{\mathbf{n}}`$
    /// maps to $`(\cos(t/2), \sin(t/2)\,\hat{\mathbf{n}})`$ with the trigonometry
    /// evaluated in turns. Rotations shorter than the identity threshold give
    /// the identity quaternion directly, avoiding a division by a vanishing
    /// turn count.
    #[must_use]
    pub fn as_quaternion(&self) -> Quaternion<f64> {
        let t = self.turns();
        if t < IDENTITY_TURN_THRESHOLD {
            return Quaternion::identity();
        }
        let c = trig::cos(t / 2.0);
        let s = trig::sin(t / 2.0) / t;
        Quaternion::new(c, s * self.x, s * self.y, s * self.z)
    }

    /// Returns the rotation that rotates in the same way as the given
    /// quaternion.
    ///
    /// Both the recovered turn count and the recovered components are snapped
    /// to nearby quarter-turn multiples: real-valued trigonometric round
    /// trips otherwise leave residues of order $`10^{-16}`$ that would break
    /// exact comparisons for canonical rotations.
    ///
    /// A full-turn quaternion ($`w = -1`$ with vanishing imaginary part)
    /// carries no recoverable axis; it maps to the zero rotation, which is
    /// canonically equal to every full turn.
    #[must_use]
    pub fn from_quaternion(q: Quaternion<f64>) -> Self {
        let turns = 2.0 * trig::atan2(q.imag().norm(), q.w);
        let smoothed_turns = trig::smooth_near_quarter_turn(turns);
        let d = trig::sinc(smoothed_turns / 2.0) / 2.0;
        if d == 0.0 {
            return Rotation::default();
        }
        Rotation::new(
            trig::smooth_near_quarter_turn(q.i / d),
            trig::smooth_near_quarter_turn(q.j / d),
            trig::smooth_near_quarter_turn(q.k / d),
        )
    }

    /// Returns the unitary matrix corresponding to this rotation.
    ///
    /// The mapping is continuous almost everywhere in $`(x, y, z)`$ and takes
    /// half turns about each coordinate axis to the corresponding Pauli
    /// matrix exactly. With $`\theta`$ the turn count and
    /// $`v = x\mathsf{X} + y\mathsf{Y} + z\mathsf{Z}`$, the result is
    ///
    /// ```math
    ///     \tfrac{1}{2}\left[
    ///         \mathsf{I}\,(1 + \mathrm{e}^{\mathrm{i}s\theta\tau})
    ///         + s\,v\,\frac{1 - \mathrm{e}^{\mathrm{i}s\theta\tau}}{\theta}
    ///     \right],
    /// ```
    ///
    /// where the sign $`s`$ selects a branch of the global phase. No phase
    /// convention can be continuous for every axis; the branch is chosen from
    /// the sign of a fixed linear functional of the axis whose zero set is a
    /// single plane, so the only discontinuity sits on inputs that practical
    /// use almost never produces exactly.
    ///
    /// For turn counts below the small-turn threshold the Pauli-term
    /// coefficient switches to a division-free form that fills in the
    /// removable singularity at $`\theta = 0`$.
    #[must_use]
    pub fn as_pauli_operation(&self) -> Array2<Complex<f64>> {
        let s = 1.0_f64.copysign(11.0 * self.x + 13.0 * self.y + 17.0 * self.z);
        let theta = self.turns();
        let v = &pauli_x() * Complex::from(self.x)
            + &pauli_y() * Complex::from(self.y)
            + &pauli_z() * Complex::from(self.z);

        let ci = Complex::from(1.0) + trig::expi(s * theta);
        let cv = if theta < SMALL_TURN_THRESHOLD {
            Complex::new(
                trig::sin(theta / 2.0) * trig::sinc(theta / 2.0),
                -s * trig::sinc(theta),
            )
        } else {
            (Complex::from(1.0) - trig::expi(s * theta)) / theta
        };

        (Array2::<Complex<f64>>::eye(2) * ci + v * (cv * s)) * Complex::from(0.5)
    }

    /// Returns the canonical form used for equality and hashing.
    ///
    /// The representative is the tuple (turns, axis), with the sign ambiguity
    /// of the double cover removed by flipping both whenever the first
    /// nonzero axis coordinate is negative, and with the turn count reduced
    /// modulo one into $`[-1/2, 1/2)`$ so that full turns vanish. A reduced
    /// turn count of exactly zero collapses the whole tuple to zeros.
    fn canonical(&self) -> (f64, f64, f64, f64) {
        let axis = self.axis();
        let (mut t, mut x, mut y, mut z) = (self.turns(), axis[0], axis[1], axis[2]);

        let mut leading = x;
        if leading == 0.0 {
            leading = y;
        }
        if leading == 0.0 {
            leading = z;
        }
        if leading < 0.0 {
            t = -t;
            x = -x;
            y = -y;
            z = -z;
        }

        t = t.rem_euclid(1.0);
        if t == 0.0 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        if t >= 0.5 {
            t -= 1.0;
        }
        (t, x, y, z)
    }
}

impl PartialEq for Rotation {
    /// Two rotations are equal if and only if their canonical forms are
    /// identical, so aliases of the same physical rotation compare equal even
    /// when their raw components differ.
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Rotation {}

impl Hash for Rotation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (t, x, y, z) = self.canonical();
        for v in [t, x, y, z] {
            // -0.0 and +0.0 compare equal and must hash identically.
            (v + 0.0).integer_decode().hash(state);
        }
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    /// Negates the raw components. The result undoes `self`, but its
    /// components are not canonicalized: `-r == r` can still hold through
    /// canonicalization at comparison time (e.g. for half turns).
    fn neg(self) -> Self::Output {
        Rotation::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.turns().rem_euclid(1.0);
        if t == 0.0 {
            return write!(f, "(no rotation)");
        }
        if !(0.001..=0.999).contains(&t) {
            return write!(f, "(negligible rotation)");
        }

        if self.y == 0.0 && self.z == 0.0 {
            write!(f, "X:{}", write_turn_fraction(self.x.rem_euclid(1.0)))
        } else if self.x == 0.0 && self.z == 0.0 {
            write!(f, "Y:{}", write_turn_fraction(self.y.rem_euclid(1.0)))
        } else if self.x == 0.0 && self.y == 0.0 {
            write!(f, "Z:{}", write_turn_fraction(self.z.rem_euclid(1.0)))
        } else {
            write!(f, "({}, {}, {})", self.x, self.y, self.z)
        }
    }
}
