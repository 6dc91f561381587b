//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a hash function
//! with a compile-time capacity. Engines whose output size is chosen at run
//! time (the configurable sponge) fill a `Digest<64>` and record the logical
//! length alongside.

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::{ConstantTimeEq, FixedSize};

/// A digest with a fixed capacity and a logical length
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data, len: N }
    }

    /// Create a new digest whose first `len` bytes are meaningful
    pub fn with_len(data: [u8; N], len: usize) -> Result<Self> {
        validate::max_length("Digest::with_len", len, N)?;
        Ok(Self { data, len })
    }

    /// Create from a slice no longer than the capacity
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::max_length("Digest::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data[..slice.len()].copy_from_slice(slice);

        Ok(Self {
            data,
            len: slice.len(),
        })
    }

    /// Get the length of the digest
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the meaningful bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Convert to a lowercase hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> alloc::string::String {
        hex::encode(self.as_bytes())
    }

    /// Create from a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| crate::error::Error::param("hex_str", "Invalid hexadecimal string"))?;

        Self::from_slice(&bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> PartialEq<[u8]> for Digest<N> {
    fn eq(&self, other: &[u8]) -> bool {
        dhash_internal::constant_time::ct_eq(self.as_bytes(), other)
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({}) [len={}]", N, self, self.len)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        dhash_internal::constant_time::ct_eq(self.as_bytes(), other.as_bytes())
    }
}

impl<const N: usize> FixedSize for Digest<N> {
    fn size() -> usize {
        N
    }
}
