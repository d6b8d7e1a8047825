//! Miscellaneous small utilities.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A trait for hashing floats through an exact bit-level decomposition.
///
/// `f64` implements neither [`Hash`] nor [`Eq`]; types whose equality is
/// defined through exact comparison of derived float tuples can nevertheless
/// hash those floats consistently by decomposing them into integer parts.
pub trait HashableFloat {
    /// Returns the mantissa-exponent-sign triplet for a float.
    ///
    /// Two floats that compare equal with `==` decode to the same triplet,
    /// with the sole exception of the two signed zeros, which callers must
    /// collapse beforehand (e.g. by adding `0.0`).
    ///
    /// Reference: <https://stackoverflow.com/questions/39638363/how-can-i-use-a-hashmap-with-f64-as-key-in-rust>
    fn integer_decode(self) -> (u64, i16, i8);
}

impl HashableFloat for f64 {
    fn integer_decode(self) -> (u64, i16, i8) {
        let bits = self.to_bits();
        let sign: i8 = if bits >> 63 == 0 { 1 } else { -1 };
        let mut exponent: i16 = ((bits >> 52) & 0x7ff) as i16;
        let mantissa = if exponent == 0 {
            (bits & 0xf_ffff_ffff_ffff) << 1
        } else {
            (bits & 0xf_ffff_ffff_ffff) | 0x10_0000_0000_0000
        };

        exponent -= 1023 + 52;
        (mantissa, exponent, sign)
    }
}

/// Returns the hash value of a hashable struct.
///
/// # Arguments
///
/// * `t` - A struct of a hashable type.
///
/// # Returns
///
/// The hash value.
pub fn calculate_hash<T: Hash>(t: &T) -> u64 {
    let mut s = DefaultHasher::new();
    t.hash(&mut s);
    s.finish()
}
