//! Constants for hash functions

/// Output size of BLAKE-384 in bytes
pub const BLAKE384_OUTPUT_SIZE: usize = 48;

/// Output size of BLAKE-512 in bytes
pub const BLAKE512_OUTPUT_SIZE: usize = 64;

/// Internal block size of BLAKE-384/512 in bytes
pub const BLAKE_BLOCK_SIZE: usize = 128;

/// Size of the BLAKE salt in bytes (four 64-bit words)
pub const BLAKE_SALT_SIZE: usize = 32;

/// Offset inside the final block where the 128-bit length field begins
pub const BLAKE_LENGTH_OFFSET: usize = 112;

/// Output size of SHA3-224 / Keccak-224 in bytes
pub const SHA3_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA3-256 / Keccak-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-384 / Keccak-384 in bytes
pub const SHA3_384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA3-512 / Keccak-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Largest digest the single-squeeze sponge produces
pub const SHA3_MAX_OUTPUT_SIZE: usize = 64;

/// Width of the Keccak-f[1600] state in bytes
pub const KECCAK_STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the Keccak-f[1600] state
pub const KECCAK_LANES: usize = 25;
