//! Internal utilities shared by the dhash crates

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
