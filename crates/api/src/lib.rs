//! Public API types for the dhash library
//!
//! This crate carries the error surface every dhash crate reports through.
//! Hash primitives themselves live in `dhash-algorithms`; collaborators such
//! as file-hashing pipelines only need the types re-exported here plus the
//! digest bytes.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
