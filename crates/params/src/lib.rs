//! Constant values for dhash hashing operations
//!
//! This library provides the sizes shared across the dhash crates.

#![no_std]

pub mod utils;
