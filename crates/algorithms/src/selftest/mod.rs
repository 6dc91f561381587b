//! Known-answer self test
//!
//! Runs every hash family against fixed vectors before the hashing pipeline
//! trusts it. Each multi-block vector is fed three ways (one buffer, two
//! halves, one byte at a time) so a chunking bug shows up here rather than
//! as a silently wrong file digest.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};
use crate::hash::{Blake384, Blake512, HashFunction, Sha3_256, Sha3_384, Sha3_512};
use dhash_internal::constant_time::ct_eq;

/// How a vector's message is handed to `update`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// A single `update` with the whole message
    Whole,
    /// Two `update` calls split at the midpoint
    Halves,
    /// One `update` per byte
    Bytewise,
}

impl Feed {
    const ALL: [Feed; 3] = [Feed::Whole, Feed::Halves, Feed::Bytewise];
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feed::Whole => write!(f, "single buffer"),
            Feed::Halves => write!(f, "two halves"),
            Feed::Bytewise => write!(f, "byte by byte"),
        }
    }
}

/// Known-answer vector: `len` copies of `byte`, and the expected digest
#[derive(Debug)]
struct DigestKat {
    name: &'static str,
    byte: u8,
    len: usize,
    digest: &'static str,
    multi_feed: bool,
}

const BLAKE384_VECTORS: &[DigestKat] = &[
    DigestKat {
        name: "BLAKE-384, 1 zero byte",
        byte: 0x00,
        len: 1,
        digest: "10281f67e135e90ae8e882251a355510a719367ad70227b137343e1bc122015c29391e8545b5272d13a7c2879da3d807",
        multi_feed: false,
    },
    DigestKat {
        name: "BLAKE-384, 144 zero bytes",
        byte: 0x00,
        len: 144,
        digest: "0b9845dd429566cdab772ba195d271effe2d0211f16991d766ba749447c5cde569780b2daa66c4b224a2ec2e5d09174c",
        multi_feed: false,
    },
];

const BLAKE512_VECTORS: &[DigestKat] = &[
    DigestKat {
        name: "BLAKE-512, 1 zero byte",
        byte: 0x00,
        len: 1,
        digest: "97961587f6d970faba6d2478045de6d1fabd09b61ae50932054d52bc29d31be4ff9102b9f69e2bbdb83be13d4b9c06091e5fa0b48bd081b634058be0ec49beb3",
        multi_feed: false,
    },
    DigestKat {
        name: "BLAKE-512, 144 zero bytes",
        byte: 0x00,
        len: 144,
        digest: "313717d608e9cf758dcb1eb0f0c3cf9fc150b2d500fb33f51c52afc99d358a2f1374b8a38bba7974e7f6ef79cab16f22ce1e649d6e01ad9589c213045d545dde",
        multi_feed: false,
    },
];

const SHA3_256_VECTORS: &[DigestKat] = &[
    DigestKat {
        name: "SHA3-256, empty",
        byte: 0x00,
        len: 0,
        digest: "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        multi_feed: false,
    },
    DigestKat {
        name: "SHA3-256, 200 x 0xA3",
        byte: 0xa3,
        len: 200,
        digest: "79f38adec5c20307a98ef76e8324afbfd46cfd81b22e3973c65fa1bd9de31787",
        multi_feed: true,
    },
];

const SHA3_384_VECTORS: &[DigestKat] = &[DigestKat {
    name: "SHA3-384, 200 x 0xA3",
    byte: 0xa3,
    len: 200,
    digest: "1881de2ca7e41ef95dc4732b8f5f002b189cc1e42b74168ed1732649ce1dbcdd76197a31fd55ee989f2d7050dd473e8f",
    multi_feed: true,
}];

const SHA3_512_VECTORS: &[DigestKat] = &[DigestKat {
    name: "SHA3-512, 200 x 0xA3",
    byte: 0xa3,
    len: 200,
    digest: "e76dfad22084a8b1467fcf2ffa58361bec7628edf5f3fdc0e4805dc48caeeca81b7c13c30adf52a3659584739a2df46be589c51ca1a4a8416df6545a1ce8ba00",
    multi_feed: true,
}];

/// Outcome of one vector under one feeding pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Vector name
    pub name: &'static str,
    /// How the message was fed
    pub feed: Feed,
    /// Whether the digest matched
    pub passed: bool,
}

/// Collected outcomes of [`run`]
#[derive(Clone, Debug, Default)]
pub struct SelfTestReport {
    results: Vec<KnownAnswer>,
}

impl SelfTestReport {
    /// Every outcome in execution order
    pub fn results(&self) -> &[KnownAnswer] {
        &self.results
    }

    /// True if every vector matched
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// The vectors that did not match
    pub fn failures(&self) -> impl Iterator<Item = &KnownAnswer> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Turn a failed run into an error
    pub fn ensure(&self) -> Result<()> {
        if let Some(first) = self.failures().next() {
            log::error!("self-test failed: {} ({})", first.name, first.feed);
            return Err(Error::Processing {
                operation: "self-test",
                details: "Known-answer digest mismatch",
            });
        }
        Ok(())
    }
}

fn hash_with<H: HashFunction>(msg: &[u8], feed: Feed) -> Result<H::Output> {
    let mut hasher = H::new();
    match feed {
        Feed::Whole => {
            hasher.update(msg)?;
        }
        Feed::Halves => {
            let (head, tail) = msg.split_at(msg.len() / 2);
            hasher.update(head)?.update(tail)?;
        }
        Feed::Bytewise => {
            for b in msg {
                hasher.update(core::slice::from_ref(b))?;
            }
        }
    }
    hasher.finalize_once()
}

fn check<H: HashFunction>(vectors: &[DigestKat], results: &mut Vec<KnownAnswer>) {
    for kat in vectors {
        let msg = vec![kat.byte; kat.len];
        let feeds: &[Feed] = if kat.multi_feed {
            &Feed::ALL
        } else {
            &Feed::ALL[..1]
        };
        for &feed in feeds {
            let passed = match (hash_with::<H>(&msg, feed), hex::decode(kat.digest)) {
                (Ok(digest), Ok(expected)) => ct_eq(digest.as_ref(), &expected),
                _ => false,
            };
            if !passed {
                log::error!("{} ({}): digest mismatch", kat.name, feed);
            }
            results.push(KnownAnswer {
                name: kat.name,
                feed,
                passed,
            });
        }
    }
}

/// Run every built-in known-answer vector
pub fn run() -> SelfTestReport {
    let mut results = Vec::new();
    check::<Blake384>(BLAKE384_VECTORS, &mut results);
    check::<Blake512>(BLAKE512_VECTORS, &mut results);
    check::<Sha3_256>(SHA3_256_VECTORS, &mut results);
    check::<Sha3_384>(SHA3_384_VECTORS, &mut results);
    check::<Sha3_512>(SHA3_512_VECTORS, &mut results);

    let report = SelfTestReport { results };
    let passed = report.results.iter().filter(|r| r.passed).count();
    log::info!(
        "self-test: {}/{} known answers passed",
        passed,
        report.results.len()
    );
    report
}
