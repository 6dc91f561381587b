//! Constant-time comparisons for digest values
//!
//! Audit code compares freshly computed digests against stored ones; these
//! helpers keep those comparisons independent of where the first mismatch is.

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of different
/// length compare unequal without inspecting their contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Returns true when every word is zero, touching all words regardless
pub fn ct_is_zero(words: &[u64]) -> bool {
    let mut acc = Choice::from(1u8);
    for w in words {
        acc &= w.ct_eq(&0u64);
    }
    acc.into()
}
