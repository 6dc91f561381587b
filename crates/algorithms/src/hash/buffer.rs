//! Block accumulation and processed-bit counting shared by the hash engines

use core::cmp::min;

use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// Total bits processed, as a 128-bit value split into two 64-bit words
///
/// `low` wraps modulo 2^64 and carries into `high`; decrements borrow from
/// `high`, so padding bookkeeping that temporarily subtracts below zero
/// always returns to the exact message length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct BitCounter {
    low: u64,
    high: u64,
}

impl BitCounter {
    /// A counter at zero
    pub const fn new() -> Self {
        Self { low: 0, high: 0 }
    }

    /// Build a counter from its two words
    pub const fn from_words(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Low 64 bits of the count
    #[inline(always)]
    pub fn low(&self) -> u64 {
        self.low
    }

    /// High 64 bits of the count
    #[inline(always)]
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Add `bits`, carrying into the high word on wraparound
    #[inline]
    pub fn increment(&mut self, bits: u64) {
        let (low, carry) = self.low.overflowing_add(bits);
        self.low = low;
        if carry {
            self.high = self.high.wrapping_add(1);
        }
    }

    /// Subtract `bits`, borrowing from the high word on wraparound
    #[inline]
    pub fn decrement(&mut self, bits: u64) {
        let (low, borrow) = self.low.overflowing_sub(bits);
        self.low = low;
        if borrow {
            self.high = self.high.wrapping_sub(1);
        }
    }

    /// The counter plus `bits`, leaving `self` untouched
    #[inline]
    pub fn plus(mut self, bits: u64) -> Self {
        self.increment(bits);
        self
    }

    /// Big-endian `(high, low)` encoding
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.high.to_be_bytes());
        out[8..].copy_from_slice(&self.low.to_be_bytes());
        out
    }
}

/// Fixed-capacity buffer that turns arbitrary input chunks into whole blocks
///
/// `N` is the capacity; the block length actually used is passed to
/// [`feed`](Self::feed) so one buffer type serves both the 128-byte BLAKE
/// block and the sponge's digest-dependent rate. The buffered length stays
/// strictly below the block length between calls.
#[derive(Clone)]
pub struct BlockBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BlockBuffer<N> {
    /// An empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Bytes currently held
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no bytes are held
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The held bytes
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Appends `input`, handing every completed `block_len`-byte block to
    /// `compress`, and keeps the residual tail. Returns the number of blocks
    /// compressed.
    ///
    /// Whole blocks are passed straight from `input` when nothing is
    /// buffered; a block is never compressed partially.
    pub fn feed<F>(&mut self, mut input: &[u8], block_len: usize, mut compress: F) -> Result<usize>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        validate::parameter(block_len > 0, "block_len", "Block length must be non-zero")?;
        validate::max_length("block buffer", block_len, N)?;
        if self.len >= block_len {
            return Err(Error::Processing {
                operation: "block buffer",
                details: "Buffered bytes exceed the block length",
            });
        }

        let mut blocks = 0;

        if self.len > 0 {
            let fill = min(block_len - self.len, input.len());
            self.buf[self.len..self.len + fill].copy_from_slice(&input[..fill]);
            self.len += fill;
            input = &input[fill..];

            if self.len < block_len {
                return Ok(0);
            }
            compress(&self.buf[..block_len])?;
            self.len = 0;
            blocks += 1;
        }

        let mut chunks = input.chunks_exact(block_len);
        for block in &mut chunks {
            compress(block)?;
            blocks += 1;
        }

        let tail = chunks.remainder();
        self.buf[..tail.len()].copy_from_slice(tail);
        self.len = tail.len();
        Ok(blocks)
    }
}

impl<const N: usize> Zeroize for BlockBuffer<N> {
    fn zeroize(&mut self) {
        self.buf.zeroize();
        self.len.zeroize();
    }
}

impl<const N: usize> Default for BlockBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
