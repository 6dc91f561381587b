use super::*;
use crate::error::Error;
use dhash_internal::constant_time::ct_is_zero;

/// Pads the whole message up front and compresses block by block, deriving
/// each block's counter from the message length alone
fn reference<V: BlakeVariant>(msg: &[u8], salt: [u64; 4]) -> Vec<u8> {
    let bits = (msg.len() as u128) * 8;

    let mut padded = msg.to_vec();
    padded.push(0x80);
    while padded.len() % BLAKE_BLOCK_SIZE != BLAKE_LENGTH_OFFSET {
        padded.push(0);
    }
    let last = padded.len() - 1;
    padded[last] |= V::LENGTH_MARKER;
    padded.extend_from_slice(&bits.to_be_bytes());

    let mut h = V::IV;
    for (i, block) in padded.chunks(BLAKE_BLOCK_SIZE).enumerate() {
        let start = (i as u128) * 1024;
        let t = core::cmp::min(bits, start + 1024);
        let counter = BitCounter::from_words(t as u64, (t >> 64) as u64);
        let suppress = bits == 0 || start >= bits;
        compress(&mut h, &salt, &counter, suppress, block).unwrap();
    }

    let mut out = vec![0u8; 64];
    BigEndian::write_u64_into(&h, &mut out);
    out.truncate(V::OUTPUT_SIZE);
    out
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

#[test]
fn test_blake384_one_zero_byte() {
    let expected = "10281f67e135e90ae8e882251a355510a719367ad70227b137343e1bc122015c29391e8545b5272d13a7c2879da3d807";
    let hash = Blake384::digest(&[0u8]).unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_blake384_144_zero_bytes() {
    let expected = "0b9845dd429566cdab772ba195d271effe2d0211f16991d766ba749447c5cde569780b2daa66c4b224a2ec2e5d09174c";
    let hash = Blake384::digest(&[0u8; 144]).unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_blake512_one_zero_byte() {
    let expected = "97961587f6d970faba6d2478045de6d1fabd09b61ae50932054d52bc29d31be4ff9102b9f69e2bbdb83be13d4b9c06091e5fa0b48bd081b634058be0ec49beb3";
    let hash = Blake512::digest(&[0u8]).unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_blake512_144_zero_bytes() {
    let expected = "313717d608e9cf758dcb1eb0f0c3cf9fc150b2d500fb33f51c52afc99d358a2f1374b8a38bba7974e7f6ef79cab16f22ce1e649d6e01ad9589c213045d545dde";
    let hash = Blake512::digest(&[0u8; 144]).unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_empty_input() {
    assert_eq!(
        hex::encode(Blake512::digest(&[]).unwrap()),
        "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
    );
    assert_eq!(
        hex::encode(Blake384::digest(&[]).unwrap()),
        "c6cbd89c926ab525c242e6621f2f5fa73aa4afe3d9e24aed727faaadd6af38b620bdb623dd2b4788b1c8086984af8706"
    );
}

#[test]
fn test_padding_paths_match_reference() {
    // 110 and below: one padding block; 111: lone pad byte; 112..=127: two
    // compressions with the second one counter-free
    for len in [0, 1, 110, 111, 112, 127, 128, 129, 238, 239, 240, 255, 256, 383] {
        let msg = pattern(len);
        assert_eq!(
            Blake384::digest(&msg).unwrap().as_ref(),
            &reference::<Blake384Algorithm>(&msg, [0; 4])[..],
            "BLAKE-384, {} bytes",
            len
        );
        assert_eq!(
            Blake512::digest(&msg).unwrap().as_ref(),
            &reference::<Blake512Algorithm>(&msg, [0; 4])[..],
            "BLAKE-512, {} bytes",
            len
        );
    }
}

#[test]
fn test_chunking_invariance() {
    let msg = pattern(1000);
    let whole = Blake512::digest(&msg).unwrap();

    for chunk in [1, 7, 111, 127, 128, 129, 500] {
        let mut hasher = Blake512::new();
        for piece in msg.chunks(chunk) {
            hasher.update(piece).unwrap();
        }
        assert_eq!(hasher.finalize().unwrap(), whole, "chunk size {}", chunk);
    }

    // zero-length updates are no-ops
    let mut hasher = Blake512::new();
    hasher.update(&[]).unwrap();
    hasher.update(&msg[..300]).unwrap();
    hasher.update(&[]).unwrap();
    hasher.update(&msg[300..]).unwrap();
    assert_eq!(hasher.finalize().unwrap(), whole);
}

#[test]
fn test_counter_carries_into_high_word() {
    let mut hasher = Blake512::new();
    hasher.counter = BitCounter::from_words(u64::MAX - 1023, 0);
    hasher.update(&[0x5a; BLAKE_BLOCK_SIZE]).unwrap();
    assert_eq!(hasher.counter, BitCounter::from_words(0, 1));

    hasher.update(&[0x5a; BLAKE_BLOCK_SIZE]).unwrap();
    assert_eq!(hasher.counter, BitCounter::from_words(1024, 1));

    // the length field carries too; finalization still succeeds and is
    // distinct from the same bytes hashed from a zero counter
    hasher.update(&[0x5a; 5]).unwrap();
    let wrapped = hasher.finalize().unwrap();
    let plain = Blake512::digest(&[0x5a; 2 * BLAKE_BLOCK_SIZE + 5]).unwrap();
    assert_ne!(wrapped, plain);
}

#[test]
fn test_length_field_carry_at_finalize() {
    // buffered bits push the low word over the edge only when added at finalize
    let mut hasher = Blake384::new();
    hasher.counter = BitCounter::from_words(u64::MAX - 7, 3);
    hasher.update(&[1u8]).unwrap();
    assert_eq!(hasher.counter.plus(8), BitCounter::from_words(0, 4));

    let carried = hasher.finalize().unwrap();
    assert_ne!(carried, Blake384::digest(&[1u8]).unwrap());
}

#[test]
fn test_salt_changes_digest() {
    let salt: Vec<u8> = (1u8..=32).collect();
    let mut salted = Blake512::with_salt(&salt).unwrap();
    salted.update(b"abc").unwrap();
    let salted = salted.finalize().unwrap();

    assert_ne!(salted, Blake512::digest(b"abc").unwrap());

    let mut words = [0u64; 4];
    BigEndian::read_u64_into(&salt, &mut words);
    assert_eq!(
        salted.as_ref(),
        &reference::<Blake512Algorithm>(b"abc", words)[..]
    );

    // an all-zero salt is the default
    let mut zero = Blake384::with_salt(&[0u8; 32]).unwrap();
    zero.update(b"abc").unwrap();
    assert_eq!(zero.finalize().unwrap(), Blake384::digest(b"abc").unwrap());
}

#[test]
fn test_salt_length_rejected() {
    let err = Blake512::with_salt(&[0u8; 16]).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "BLAKE salt",
            expected: 32,
            actual: 16
        }
    );
    assert!(Blake384::with_salt(&[0u8; 33]).is_err());
}

#[test]
fn test_use_after_finalize() {
    let mut hasher = Blake384::new();
    hasher.update(b"data").unwrap();
    hasher.finalize().unwrap();
    assert!(hasher.is_finalized());

    assert_eq!(
        hasher.update(b"more").unwrap_err(),
        Error::UseAfterFinalize {
            algorithm: "BLAKE-384"
        }
    );
    assert!(matches!(
        hasher.finalize(),
        Err(Error::UseAfterFinalize { .. })
    ));
}

#[test]
fn test_state_zeroed_after_finalize() {
    let salt = [0xffu8; 32];
    let mut hasher = Blake512::with_salt(&salt).unwrap();
    hasher.update(&pattern(200)).unwrap();
    hasher.finalize().unwrap();

    assert!(ct_is_zero(&hasher.chaining));
    assert!(ct_is_zero(&hasher.salt));
    assert_eq!(hasher.counter, BitCounter::new());
    assert!(hasher.buffer.is_empty());
    assert!(!hasher.suppress_counter);
}

#[test]
fn test_finalize_once_consumes() {
    let mut hasher = Blake512::new();
    hasher.update(&[0u8]).unwrap();
    let d = hasher.finalize_once().unwrap();
    assert_eq!(d, Blake512::digest(&[0u8]).unwrap());
}

#[test]
fn test_metadata() {
    assert_eq!(Blake384::output_size(), 48);
    assert_eq!(Blake512::output_size(), 64);
    assert_eq!(Blake512::block_size(), 128);
    assert_eq!(Blake384::name(), "BLAKE-384");
    assert_eq!(Blake512::name(), "BLAKE-512");
}

#[test]
fn test_verify() {
    let msg = pattern(300);
    let good = Blake384::digest(&msg).unwrap();
    assert!(Blake384::verify(&msg, &good).unwrap());
    assert!(!Blake384::verify(&msg[1..], &good).unwrap());
}
