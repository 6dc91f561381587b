//! BLAKE-384 and BLAKE-512
//!
//! The 64-bit members of the original BLAKE family (the SHA-3 finalist, not
//! BLAKE2): a 16-round ARX compression over 128-byte big-endian blocks with a
//! 256-bit salt and a 128-bit bit counter. Both variants share one generic
//! engine, [`Blake`], parameterized by a [`BlakeVariant`] that supplies the
//! initialization vector, output truncation and padding terminators.
//!
//! Padding appends a `1` bit, zero bits up to 888 mod 1024, a variant bit
//! (`1` for BLAKE-512, `0` for BLAKE-384) and the 128-bit big-endian message
//! length. A block that carries no message bits is compressed with the
//! counter suppressed.

use core::fmt;
use core::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Result};
use crate::hash::buffer::{BitCounter, BlockBuffer};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

use dhash_params::utils::hash::{
    BLAKE384_OUTPUT_SIZE, BLAKE512_OUTPUT_SIZE, BLAKE_BLOCK_SIZE, BLAKE_LENGTH_OFFSET,
    BLAKE_SALT_SIZE,
};

const BLAKE_ROUNDS: usize = 16;
const BLOCK_BITS: u64 = (BLAKE_BLOCK_SIZE as u64) * 8;

/// Bits of padding that take an empty buffer up to the length field, less
/// the terminator byte
const PAD_TO_TERMINATOR_BITS: u64 = ((BLAKE_LENGTH_OFFSET as u64) - 1) * 8;

/// Leading `1` bit followed by zeros
const PADDING: [u8; BLAKE_BLOCK_SIZE] = {
    let mut p = [0u8; BLAKE_BLOCK_SIZE];
    p[0] = 0x80;
    p
};

/// The first 16 words of the fractional part of π
const U512: [u64; 16] = [
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
    0x4528_21E6_38D0_1377,
    0xBE54_66CF_34E9_0C6C,
    0xC0AC_29B7_C97C_50DD,
    0x3F84_D5B5_B547_0917,
    0x9216_D5D9_8979_FB1B,
    0xD131_0BA6_98DF_B5AC,
    0x2FFD_72DB_D01A_DFB7,
    0xB8E1_AFED_6A26_7E96,
    0xBA7C_9045_F12C_7F99,
    0x24A1_9947_B391_6CF7,
    0x0801_F2E2_858E_FC16,
    0x6369_20D8_7157_4E69,
];

/// Message-word permutation schedule; rounds 10 to 15 reuse rows 0 to 5
const SIGMA: [[usize; 16]; BLAKE_ROUNDS] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
];

// ─────────────────────────────────────────────────────────────────────────────
// Variant parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters distinguishing the BLAKE variants that share [`Blake`]
pub trait BlakeVariant: HashAlgorithm {
    /// Initial chaining value
    const IV: [u64; 8];
    /// Byte appended when exactly one padding byte fits before the length
    /// field: the leading `1` bit merged with the variant bit
    const LONE_PAD_BYTE: u8;
    /// Byte written immediately before the length field otherwise
    const LENGTH_MARKER: u8;
}

/// Marker type for **BLAKE-384**
pub enum Blake384Algorithm {}
/// Marker type for **BLAKE-512**
pub enum Blake512Algorithm {}

impl HashAlgorithm for Blake384Algorithm {
    const OUTPUT_SIZE: usize = BLAKE384_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = BLAKE_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "BLAKE-384";
}

impl HashAlgorithm for Blake512Algorithm {
    const OUTPUT_SIZE: usize = BLAKE512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = BLAKE_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "BLAKE-512";
}

impl BlakeVariant for Blake384Algorithm {
    const IV: [u64; 8] = [
        0xCBBB_9D5D_C105_9ED8,
        0x629A_292A_367C_D507,
        0x9159_015A_3070_DD17,
        0x152F_ECD8_F70E_5939,
        0x6733_2667_FFC0_0B31,
        0x8EB4_4A87_6858_1511,
        0xDB0C_2E0D_64F9_8FA7,
        0x47B5_481D_BEFA_4FA4,
    ];
    const LONE_PAD_BYTE: u8 = 0x80;
    const LENGTH_MARKER: u8 = 0x00;
}

impl BlakeVariant for Blake512Algorithm {
    const IV: [u64; 8] = [
        0x6A09_E667_F3BC_C908,
        0xBB67_AE85_84CA_A73B,
        0x3C6E_F372_FE94_F82B,
        0xA54F_F53A_5F1D_36F1,
        0x510E_527F_ADE6_82D1,
        0x9B05_688C_2B3E_6C1F,
        0x1F83_D9AB_FB41_BD6B,
        0x5BE0_CD19_137E_2179,
    ];
    const LONE_PAD_BYTE: u8 = 0x81;
    const LENGTH_MARKER: u8 = 0x01;
}

// ─────────────────────────────────────────────────────────────────────────────
// Compression
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g(v: &mut [u64; 16], m: &[u64; 16], s: &[usize; 16], e: usize, a: usize, b: usize, c: usize, d: usize) {
    v[a] = v[a]
        .wrapping_add(m[s[e]] ^ U512[s[e + 1]])
        .wrapping_add(v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(25);
    v[a] = v[a]
        .wrapping_add(m[s[e + 1]] ^ U512[s[e]])
        .wrapping_add(v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(11);
}

/// Compress one 128-byte block into `h`
///
/// With `suppress_counter` set the counter is left out of the working
/// vector, as required for a block holding only padding.
pub(crate) fn compress(
    h: &mut [u64; 8],
    salt: &[u64; 4],
    counter: &BitCounter,
    suppress_counter: bool,
    block: &[u8],
) -> Result<()> {
    validate::length("BLAKE block", block.len(), BLAKE_BLOCK_SIZE)?;

    let mut m = Zeroizing::new([0u64; 16]);
    BigEndian::read_u64_into(block, &mut m[..]);

    let mut v = Zeroizing::new([0u64; 16]);
    v[..8].copy_from_slice(&h[..]);
    for i in 0..4 {
        v[8 + i] = salt[i] ^ U512[i];
    }
    v[12..].copy_from_slice(&U512[4..8]);
    if !suppress_counter {
        v[12] ^= counter.low();
        v[13] ^= counter.low();
        v[14] ^= counter.high();
        v[15] ^= counter.high();
    }

    for s in SIGMA.iter() {
        g(&mut v, &m, s, 0, 0, 4, 8, 12);
        g(&mut v, &m, s, 2, 1, 5, 9, 13);
        g(&mut v, &m, s, 4, 2, 6, 10, 14);
        g(&mut v, &m, s, 6, 3, 7, 11, 15);
        g(&mut v, &m, s, 8, 0, 5, 10, 15);
        g(&mut v, &m, s, 10, 1, 6, 11, 12);
        g(&mut v, &m, s, 12, 2, 7, 8, 13);
        g(&mut v, &m, s, 14, 3, 4, 9, 14);
    }

    for (i, word) in v.iter().enumerate() {
        h[i % 8] ^= word;
    }
    for (i, word) in h.iter_mut().enumerate() {
        *word ^= salt[i % 4];
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming state
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming BLAKE engine shared by every [`BlakeVariant`]
pub struct Blake<V: BlakeVariant> {
    chaining: [u64; 8],
    salt: [u64; 4],
    counter: BitCounter,
    buffer: BlockBuffer<BLAKE_BLOCK_SIZE>,
    suppress_counter: bool,
    finalized: bool,
    _variant: PhantomData<V>,
}

/// Streaming **BLAKE-384**
pub type Blake384 = Blake<Blake384Algorithm>;
/// Streaming **BLAKE-512**
pub type Blake512 = Blake<Blake512Algorithm>;

impl<V: BlakeVariant> Blake<V> {
    fn init(salt: [u64; 4]) -> Self {
        Self {
            chaining: V::IV,
            salt,
            counter: BitCounter::new(),
            buffer: BlockBuffer::new(),
            suppress_counter: false,
            finalized: false,
            _variant: PhantomData,
        }
    }

    /// Creates a salted state; `salt` must be exactly 32 bytes and is read
    /// as four big-endian words
    pub fn with_salt(salt: &[u8]) -> Result<Self> {
        validate::length("BLAKE salt", salt.len(), BLAKE_SALT_SIZE)?;
        let mut words = [0u64; 4];
        BigEndian::read_u64_into(salt, &mut words);
        Ok(Self::init(words))
    }

    fn absorb(&mut self, data: &[u8]) -> Result<()> {
        let Self {
            chaining,
            salt,
            counter,
            buffer,
            suppress_counter,
            ..
        } = self;
        let suppress = *suppress_counter;
        buffer.feed(data, BLAKE_BLOCK_SIZE, |block| {
            counter.increment(BLOCK_BITS);
            compress(chaining, salt, counter, suppress, block)
        })?;
        Ok(())
    }

    fn update_internal(&mut self, data: &[u8]) -> Result<()> {
        validate::not_finalized(self.finalized, V::ALGORITHM_ID)?;
        self.absorb(data)
    }

    fn finalize_internal(&mut self, out: &mut [u8]) -> Result<()> {
        validate::not_finalized(self.finalized, V::ALGORITHM_ID)?;
        validate::length("BLAKE output", out.len(), V::OUTPUT_SIZE)?;

        let buffered = self.buffer.len();
        let buffered_bits = (buffered as u64) * 8;
        let total = self.counter.plus(buffered_bits);
        let length_field = total.to_be_bytes();

        // Every padding byte fed below is counted by `absorb`; the decrements
        // cancel it so the counter only ever reflects message bits.
        if buffered == BLAKE_LENGTH_OFFSET - 1 {
            self.counter.decrement(8);
            self.absorb(&[V::LONE_PAD_BYTE])?;
        } else {
            if buffered < BLAKE_LENGTH_OFFSET - 1 {
                if buffered == 0 {
                    self.suppress_counter = true;
                }
                self.counter
                    .decrement(PAD_TO_TERMINATOR_BITS - buffered_bits);
                self.absorb(&PADDING[..BLAKE_LENGTH_OFFSET - 1 - buffered])?;
            } else {
                self.counter.decrement(BLOCK_BITS - buffered_bits);
                self.absorb(&PADDING[..BLAKE_BLOCK_SIZE - buffered])?;
                self.counter.decrement(PAD_TO_TERMINATOR_BITS);
                self.absorb(&PADDING[1..BLAKE_LENGTH_OFFSET])?;
                self.suppress_counter = true;
            }
            self.absorb(&[V::LENGTH_MARKER])?;
            self.counter.decrement(8);
        }
        self.counter.decrement(128);
        self.absorb(&length_field)?;

        let mut words = Zeroizing::new([0u8; 64]);
        BigEndian::write_u64_into(&self.chaining, &mut words[..]);
        out.copy_from_slice(&words[..V::OUTPUT_SIZE]);

        log::debug!(
            "{}: finalized after {} message bytes",
            V::ALGORITHM_ID,
            total.low() / 8
        );

        self.zeroize();
        self.finalized = true;
        Ok(())
    }
}

impl<V: BlakeVariant> Clone for Blake<V> {
    fn clone(&self) -> Self {
        Self {
            chaining: self.chaining,
            salt: self.salt,
            counter: self.counter,
            buffer: self.buffer.clone(),
            suppress_counter: self.suppress_counter,
            finalized: self.finalized,
            _variant: PhantomData,
        }
    }
}

impl<V: BlakeVariant> fmt::Debug for Blake<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(V::ALGORITHM_ID)
            .field("buffered", &self.buffer.len())
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

impl<V: BlakeVariant> Zeroize for Blake<V> {
    fn zeroize(&mut self) {
        self.chaining.zeroize();
        self.salt.zeroize();
        self.counter.zeroize();
        self.buffer.zeroize();
        self.suppress_counter.zeroize();
    }
}

impl<V: BlakeVariant> Drop for Blake<V> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<V: BlakeVariant> Default for Blake<V> {
    fn default() -> Self {
        Self::init([0u64; 4])
    }
}

macro_rules! impl_blake_variant {
    ($alg:ty, $out:expr) => {
        impl HashFunction for Blake<$alg> {
            type Algorithm = $alg;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self::default()
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.update_internal(data)?;
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let mut out = [0u8; $out];
                self.finalize_internal(&mut out)?;
                Ok(Digest::new(out))
            }

            fn is_finalized(&self) -> bool {
                self.finalized
            }
        }
    };
}

impl_blake_variant!(Blake384Algorithm, BLAKE384_OUTPUT_SIZE);
impl_blake_variant!(Blake512Algorithm, BLAKE512_OUTPUT_SIZE);

#[cfg(test)]
mod tests;
