//! # spinrot: rotations in turns and their single-qubit gate forms
//!
//! `spinrot` represents rotations of three-dimensional space as rotation
//! vectors whose components are measured in fractions of a full turn, and
//! converts them losslessly between three equivalent forms:
//!
//! - an axis-angle rotation vector ([`rotation::Rotation`]), whose direction
//!   is the rotation axis and whose magnitude is the rotation angle in turns,
//! - a unit quaternion ([`nalgebra::Quaternion`]), through which rotations
//!   compose, and
//! - a $`2\times 2`$ unitary matrix over the Pauli basis, the form a rotation
//!   takes when it doubles as a single-qubit gate.
//!
//! On top of the value type sit three groups of utilities:
//!
//! - [`unitary::unitary_breakdown`] recovers the Pauli-basis coefficients and
//!   the global phase of an arbitrary $`2\times 2`$ unitary,
//! - [`unitary::unitary_lerp`] interpolates between two unitaries along the
//!   great-circle path, remaining unitary at every intermediate point, and
//! - [`simplification::plus_rotation_simplified`] applies local rewrite rules
//!   to sequences of rotations.
//!
//! Angles are measured in turns throughout, where `1.0` is a full revolution;
//! the [`trig`] module provides the turns-based trigonometry this requires.
//!
//! The quaternion algebra is supplied by [`nalgebra`], and gate matrices are
//! [`ndarray`] arrays of [`num_complex::Complex`] values.

pub mod auxiliary;
pub mod rotation;
pub mod simplification;
pub mod trig;
pub mod unitary;
