//! Value types produced by the hash primitives

pub mod digest;

pub use digest::Digest;

/// Trait for types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types with a compile-time capacity
pub trait FixedSize {
    /// Capacity in bytes
    fn size() -> usize;
}
