//! Streaming digest primitives for file hashing and audit tools
//!
//! This crate provides BLAKE-384, BLAKE-512 and the Keccak-f[1600] sponge
//! (original Keccak and NIST SHA-3 padding) behind one streaming
//! [`HashFunction`] interface. Every state accepts input in arbitrary chunks,
//! produces its digest exactly once, and zeroes itself when finalized.
//!
//! The library is usable in both `std` and `no_std` environments; the
//! self-test report and hex helpers need `alloc`.
//!
//! ```
//! use dhash_algorithms::{Blake512, HashFunction};
//!
//! let mut h = Blake512::new();
//! h.update(b"part one, ").unwrap();
//! h.update(b"part two").unwrap();
//! let digest = h.finalize().unwrap();
//! assert_eq!(digest.len(), 64);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{
    Blake, Blake384, Blake512, BlakeVariant, HashAlgorithm, HashFunction, Keccak224, Keccak256,
    Keccak384, Keccak512, Sha3, Sha3_224, Sha3_256, Sha3_384, Sha3_512, SpongePadding,
};

// Digest value type
pub mod types;
pub use types::Digest;

// Known-answer self test
#[cfg(feature = "alloc")]
pub mod selftest;
#[cfg(feature = "alloc")]
pub use selftest::{KnownAnswer, SelfTestReport};
