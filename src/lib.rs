//! # dhash
//!
//! Streaming digest core for file hashing and audit tools: BLAKE-384,
//! BLAKE-512 and the Keccak/SHA-3 sponge.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dhash = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and everything in `alloc`
//! - `alloc`: hex helpers on [`Digest`](algorithms::Digest) and the self-test report
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dhash-api`]: Public error type
//! - [`dhash-internal`]: Constant-time comparison helpers
//! - [`dhash-params`]: Size constants
//! - [`dhash-algorithms`]: The hash engines, digest type and self test
//!
//! ```
//! use dhash::prelude::*;
//!
//! let mut h = Sha3_256::new();
//! h.update(b"").unwrap();
//! assert_eq!(
//!     h.finalize().unwrap().to_hex(),
//!     "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use dhash_algorithms as algorithms;
pub use dhash_api as api;
pub use dhash_internal as internal;
pub use dhash_params as params;

/// Common imports for dhash users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::algorithms::{BlakeVariant, HashAlgorithm, HashFunction};

    // Re-export the engines
    pub use crate::algorithms::{
        Blake384, Blake512, Keccak224, Keccak256, Keccak384, Keccak512, Sha3, Sha3_224,
        Sha3_256, Sha3_384, Sha3_512, SpongePadding,
    };

    pub use crate::algorithms::Digest;

    // Re-export zeroize for clearing caller-held digests
    pub use zeroize::Zeroize;
}

/// Run the built-in known-answer tests, mapping a failure to the public error
///
/// Returns the full report on success so callers can log individual outcomes.
#[cfg(feature = "alloc")]
pub fn self_test() -> api::Result<algorithms::SelfTestReport> {
    let report = algorithms::selftest::run();
    report.ensure().map_err(|_| api::Error::SelfTestFailed {
        context: "dhash self-test",
    })?;
    Ok(report)
}
