//! Keccak / SHA-3 sponge
//!
//! A single-squeeze sponge over Keccak-f[1600] with a configurable digest
//! size. The rate is `200 - 2 * digest_size` bytes; digest sizes are limited
//! to multiples of 4 in `4..=64` so the rate is a whole number of lanes and
//! the digest fits in the first rate window.
//!
//! Two padding conventions are available. [`SpongePadding::Keccak`] is the
//! original submission padding (`0x01 .. 0x80`); [`SpongePadding::Sha3`] is
//! FIPS 202 (`0x06 .. 0x80`). They produce unrelated digests for the same
//! input.

use core::fmt;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Result};
use crate::hash::buffer::BlockBuffer;
use crate::hash::keccak::{keccak_f1600, KeccakState};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

use dhash_params::utils::hash::{
    KECCAK_LANES, KECCAK_STATE_BYTES, SHA3_224_OUTPUT_SIZE, SHA3_256_OUTPUT_SIZE,
    SHA3_384_OUTPUT_SIZE, SHA3_512_OUTPUT_SIZE, SHA3_MAX_OUTPUT_SIZE,
};

const MIN_OUTPUT_SIZE: usize = 4;
/// Rate of the smallest digest size
const MAX_RATE: usize = KECCAK_STATE_BYTES - 2 * MIN_OUTPUT_SIZE;

const fn rate_for(digest_size: usize) -> usize {
    KECCAK_STATE_BYTES - 2 * digest_size
}

/// Padding convention applied at finalization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpongePadding {
    /// Original Keccak padding, domain byte `0x01`
    #[default]
    Keccak,
    /// NIST FIPS 202 padding, domain byte `0x06`
    Sha3,
}

impl SpongePadding {
    /// Byte XORed in directly after the message
    pub const fn domain_byte(self) -> u8 {
        match self {
            SpongePadding::Keccak => 0x01,
            SpongePadding::Sha3 => 0x06,
        }
    }

    const fn family(self) -> &'static str {
        match self {
            SpongePadding::Keccak => "Keccak",
            SpongePadding::Sha3 => "SHA3",
        }
    }
}

/// Streaming sponge with a runtime digest size
///
/// ```
/// use dhash_algorithms::hash::{Sha3, SpongePadding};
///
/// let mut h = Sha3::new(32, SpongePadding::Sha3).unwrap();
/// h.update(b"").unwrap();
/// let d = h.finalize().unwrap();
/// assert_eq!(d.len(), 32);
/// ```
pub struct Sha3 {
    lanes: KeccakState,
    partial: BlockBuffer<MAX_RATE>,
    rate: usize,
    digest_size: usize,
    padding: SpongePadding,
    absorbed: u64,
    name: &'static str,
    finalized: bool,
}

#[inline]
fn absorb_block(lanes: &mut KeccakState, block: &[u8]) {
    for (lane, word) in lanes.iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= LittleEndian::read_u64(word);
    }
    keccak_f1600(lanes);
}

impl Sha3 {
    /// Creates a sponge producing `digest_size` bytes
    ///
    /// `digest_size` must be a multiple of 4 between 4 and 64.
    pub fn new(digest_size: usize, padding: SpongePadding) -> Result<Self> {
        validate::parameter(
            (MIN_OUTPUT_SIZE..=SHA3_MAX_OUTPUT_SIZE).contains(&digest_size)
                && digest_size % 4 == 0,
            "digest_size",
            "Digest size must be a multiple of 4 between 4 and 64 bytes",
        )?;
        Ok(Self::init(digest_size, padding, padding.family()))
    }

    fn init(digest_size: usize, padding: SpongePadding, name: &'static str) -> Self {
        Self {
            lanes: [0u64; KECCAK_LANES],
            partial: BlockBuffer::new(),
            rate: rate_for(digest_size),
            digest_size,
            padding,
            absorbed: 0,
            name,
            finalized: false,
        }
    }

    /// Bytes absorbed per permutation
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Digest length in bytes
    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Padding convention in use
    pub fn padding(&self) -> SpongePadding {
        self.padding
    }

    /// True once the digest has been produced
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Absorb more input
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        validate::not_finalized(self.finalized, self.name)?;

        let Self {
            lanes,
            partial,
            rate,
            ..
        } = self;
        partial.feed(data, *rate, |block| {
            absorb_block(lanes, block);
            Ok(())
        })?;
        self.absorbed = self.absorbed.wrapping_add(data.len() as u64);
        Ok(self)
    }

    /// Pad, permute and squeeze; the digest's length is `digest_size`
    pub fn finalize(&mut self) -> Result<Digest<SHA3_MAX_OUTPUT_SIZE>> {
        let mut out = [0u8; SHA3_MAX_OUTPUT_SIZE];
        let n = self.digest_size;
        self.finalize_into(&mut out[..n])?;
        Digest::with_len(out, n)
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        validate::not_finalized(self.finalized, self.name)?;
        validate::length("sponge output", out.len(), self.digest_size)?;

        let rate = self.rate;
        let tail = self.partial.len();

        let mut block = Zeroizing::new([0u8; MAX_RATE]);
        block[..tail].copy_from_slice(self.partial.as_slice());
        block[tail] ^= self.padding.domain_byte();
        block[rate - 1] ^= 0x80;
        absorb_block(&mut self.lanes, &block[..rate]);

        let mut squeezed = Zeroizing::new([0u8; SHA3_MAX_OUTPUT_SIZE]);
        LittleEndian::write_u64_into(&self.lanes[..SHA3_MAX_OUTPUT_SIZE / 8], &mut squeezed[..]);
        out.copy_from_slice(&squeezed[..self.digest_size]);

        log::debug!(
            "{}: finalized {}-byte digest after {} message bytes",
            self.name,
            self.digest_size,
            self.absorbed
        );

        self.zeroize();
        self.finalized = true;
        Ok(())
    }
}

impl Clone for Sha3 {
    fn clone(&self) -> Self {
        Self {
            lanes: self.lanes,
            partial: self.partial.clone(),
            rate: self.rate,
            digest_size: self.digest_size,
            padding: self.padding,
            absorbed: self.absorbed,
            name: self.name,
            finalized: self.finalized,
        }
    }
}

impl fmt::Debug for Sha3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha3")
            .field("name", &self.name)
            .field("digest_size", &self.digest_size)
            .field("padding", &self.padding)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

impl Zeroize for Sha3 {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
        self.partial.zeroize();
        self.absorbed.zeroize();
    }
}

impl Drop for Sha3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ─────────────────────────── fixed-size front-ends ─────────────────────────

macro_rules! impl_sponge_variant {
    ($name:ident, $alg:ident, $id:literal, $out:expr, $padding:expr) => {
        #[doc = concat!("Marker type for **", $id, "**")]
        pub enum $alg {}

        impl HashAlgorithm for $alg {
            const OUTPUT_SIZE: usize = $out;
            const BLOCK_SIZE: usize = rate_for($out);
            const ALGORITHM_ID: &'static str = $id;
        }

        #[doc = concat!("Streaming **", $id, "**")]
        #[derive(Clone, Debug)]
        pub struct $name {
            inner: Sha3,
        }

        impl HashFunction for $name {
            type Algorithm = $alg;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self {
                    inner: Sha3::init($out, $padding, $id),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.inner.update(data)?;
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let mut out = [0u8; $out];
                self.inner.finalize_into(&mut out)?;
                Ok(Digest::new(out))
            }

            fn is_finalized(&self) -> bool {
                self.inner.finalized
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }
    };
}

impl_sponge_variant!(
    Keccak224,
    Keccak224Algorithm,
    "Keccak-224",
    SHA3_224_OUTPUT_SIZE,
    SpongePadding::Keccak
);
impl_sponge_variant!(
    Keccak256,
    Keccak256Algorithm,
    "Keccak-256",
    SHA3_256_OUTPUT_SIZE,
    SpongePadding::Keccak
);
impl_sponge_variant!(
    Keccak384,
    Keccak384Algorithm,
    "Keccak-384",
    SHA3_384_OUTPUT_SIZE,
    SpongePadding::Keccak
);
impl_sponge_variant!(
    Keccak512,
    Keccak512Algorithm,
    "Keccak-512",
    SHA3_512_OUTPUT_SIZE,
    SpongePadding::Keccak
);
impl_sponge_variant!(
    Sha3_224,
    Sha3_224Algorithm,
    "SHA3-224",
    SHA3_224_OUTPUT_SIZE,
    SpongePadding::Sha3
);
impl_sponge_variant!(
    Sha3_256,
    Sha3_256Algorithm,
    "SHA3-256",
    SHA3_256_OUTPUT_SIZE,
    SpongePadding::Sha3
);
impl_sponge_variant!(
    Sha3_384,
    Sha3_384Algorithm,
    "SHA3-384",
    SHA3_384_OUTPUT_SIZE,
    SpongePadding::Sha3
);
impl_sponge_variant!(
    Sha3_512,
    Sha3_512Algorithm,
    "SHA3-512",
    SHA3_512_OUTPUT_SIZE,
    SpongePadding::Sha3
);
