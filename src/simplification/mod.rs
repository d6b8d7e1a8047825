//! Local rewrite rules for sequences of rotations.

use crate::rotation::Rotation;


/// Appends a rotation to a sequence of rotations, applying at most one local
/// rewrite that preserves the net effect.
///
/// Two rewrites are recognised:
///
/// - `next` exactly undoes the last rotation of the sequence (canonical
///   equality with its negation): the last rotation is dropped;
/// - `next` is a quarter turn and canonically equal to each of the last two
///   rotations: the three equal quarter turns compose to three quarters of a
///   turn, which is a quarter turn the other way, so the last two are
///   replaced by a single `-next`.
///
/// Otherwise `next` is appended unchanged. The rules look no further back
/// than two elements and never cascade.
///
/// # Arguments
///
/// * `prev_rotations` - The sequence of rotations already performed.
/// * `next_rotation` - The next rotation to perform.
///
/// # Returns
///
/// A possibly simplified sequence of rotations leading to the same final
/// orientation.
#[must_use]
pub fn plus_rotation_simplified(
    prev_rotations: &[Rotation],
    next_rotation: Rotation,
) -> Vec<Rotation> {
    let n = prev_rotations.len();
    if n >= 1 && next_rotation == -prev_rotations[n - 1] {
        return prev_rotations[..n - 1].to_vec();
    }
    if n >= 2
        && next_rotation.turns() == 0.25
        && next_rotation == prev_rotations[n - 1]
        && next_rotation == prev_rotations[n - 2]
    {
        let mut simplified = prev_rotations[..n - 2].to_vec();
        simplified.push(-next_rotation);
        return simplified;
    }
    let mut extended = prev_rotations.to_vec();
    extended.push(next_rotation);
    extended
}
