//! Hash function implementations
//!
//! This module contains the streaming digests the file-hashing pipeline
//! drives: the 64-bit BLAKE family (384 and 512 bit output) and the
//! Keccak-f[1600] sponge in both its original Keccak and NIST SHA-3
//! padding conventions.
//!
//! Every engine follows the same lifecycle: construct, feed any number of
//! `update` calls with arbitrary chunking, then finalize exactly once. A
//! finalized state is zeroed and rejects further use with
//! [`Error::UseAfterFinalize`](crate::error::Error::UseAfterFinalize).

use crate::error::Result;
use dhash_internal::constant_time::ct_eq;

pub mod blake;
pub mod buffer;
pub mod keccak;
pub mod sha3;

// Re-exports
pub use blake::{Blake, Blake384, Blake384Algorithm, Blake512, Blake512Algorithm, BlakeVariant};
pub use buffer::{BitCounter, BlockBuffer};
pub use sha3::{
    Keccak224, Keccak256, Keccak384, Keccak512, Sha3, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
    SpongePadding,
};

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Block (or sponge rate) size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for streaming hash functions with a single-use lifecycle
pub trait HashFunction: Sized {
    /// Marker type describing the algorithm
    type Algorithm: HashAlgorithm;
    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input; any chunking of the same bytes gives the same digest
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produces the digest and zeroes the state
    ///
    /// A second call, or any `update` afterwards, fails with
    /// `UseAfterFinalize`.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// True once `finalize` has run
    fn is_finalized(&self) -> bool;

    /// Consuming form of `finalize`; the state cannot be touched again
    fn finalize_once(mut self) -> Result<Self::Output> {
        self.finalize()
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Hash `data` and compare the result with `expected` in constant time
    fn verify(data: &[u8], expected: &Self::Output) -> Result<bool> {
        let computed = Self::digest(data)?;
        Ok(ct_eq(computed.as_ref(), expected.as_ref()))
    }

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
