//! Keccak-f[1600] permutation
//!
//! The 1600-bit state is held as 25 little-endian 64-bit lanes, lane
//! `x + 5*y` at column `x`, row `y`. Each of the 24 rounds applies
//! θ, ρ+π, χ and ι in that order.

use dhash_params::utils::hash::KECCAK_LANES;

/// Number of rounds of Keccak-f[1600]
pub const KECCAK_ROUNDS: usize = 24;

/// The sponge state: 25 lanes of 64 bits
pub type KeccakState = [u64; KECCAK_LANES];

/// Round constants for ι
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ rotation offsets, in the order the π walk visits lanes
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π destination lanes; the walk starts from lane 1 (lane 0 is fixed)
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

#[inline(always)]
fn theta(a: &mut KeccakState) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

#[inline(always)]
fn rho_pi(a: &mut KeccakState) {
    let mut carried = a[1];
    for (&dst, &rot) in PI.iter().zip(RHO.iter()) {
        let displaced = a[dst];
        a[dst] = carried.rotate_left(rot);
        carried = displaced;
    }
}

#[inline(always)]
fn chi(a: &mut KeccakState) {
    for row in a.chunks_exact_mut(5) {
        let r = [row[0], row[1], row[2], row[3], row[4]];
        for x in 0..5 {
            row[x] = r[x] ^ (!r[(x + 1) % 5] & r[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(a: &mut KeccakState, round: usize) {
    a[0] ^= RC[round];
}

/// Apply the full 24-round Keccak-f[1600] permutation in place
pub fn keccak_f1600(state: &mut KeccakState) {
    for round in 0..KECCAK_ROUNDS {
        theta(state);
        rho_pi(state);
        chi(state);
        iota(state, round);
    }
}
