//! Differential tests against the RustCrypto `sha3` crate

use dhash_algorithms::hash::{
    HashFunction, Keccak224, Keccak256, Keccak384, Keccak512, Sha3, Sha3_224, Sha3_256, Sha3_384,
    Sha3_512, SpongePadding,
};
use proptest::prelude::*;

fn reference<D: sha3::Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

fn ours<H: HashFunction>(data: &[u8]) -> Vec<u8> {
    H::digest(data).unwrap().as_ref().to_vec()
}

/// Feed `data` in steps derived from the data itself
fn ours_streaming<H: HashFunction>(data: &[u8]) -> Vec<u8> {
    let mut h = H::new();
    let mut i = 0usize;
    while i < data.len() {
        let step = (data[i] as usize % 97) + 1;
        let end = core::cmp::min(data.len(), i + step);
        h.update(&data[i..end]).unwrap();
        i = end;
    }
    h.finalize().unwrap().as_ref().to_vec()
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..4096)
}

proptest! {
    #[test]
    fn sha3_matches_sha3_crate(data in arb_data()) {
        prop_assert_eq!(ours::<Sha3_224>(&data), reference::<sha3::Sha3_224>(&data));
        prop_assert_eq!(ours::<Sha3_256>(&data), reference::<sha3::Sha3_256>(&data));
        prop_assert_eq!(ours::<Sha3_384>(&data), reference::<sha3::Sha3_384>(&data));
        prop_assert_eq!(ours::<Sha3_512>(&data), reference::<sha3::Sha3_512>(&data));
    }

    #[test]
    fn keccak_matches_sha3_crate(data in arb_data()) {
        prop_assert_eq!(ours::<Keccak224>(&data), reference::<sha3::Keccak224>(&data));
        prop_assert_eq!(ours::<Keccak256>(&data), reference::<sha3::Keccak256>(&data));
        prop_assert_eq!(ours::<Keccak384>(&data), reference::<sha3::Keccak384>(&data));
        prop_assert_eq!(ours::<Keccak512>(&data), reference::<sha3::Keccak512>(&data));
    }

    #[test]
    fn streaming_matches_sha3_crate(data in arb_data()) {
        prop_assert_eq!(ours_streaming::<Sha3_256>(&data), reference::<sha3::Sha3_256>(&data));
        prop_assert_eq!(ours_streaming::<Keccak256>(&data), reference::<sha3::Keccak256>(&data));
        prop_assert_eq!(ours_streaming::<Keccak512>(&data), reference::<sha3::Keccak512>(&data));
    }

    #[test]
    fn dynamic_engine_matches_sha3_crate(data in arb_data()) {
        let mut h = Sha3::new(32, SpongePadding::Keccak).unwrap();
        h.update(&data).unwrap();
        let digest = h.finalize().unwrap();
        prop_assert_eq!(digest.as_bytes(), &reference::<sha3::Keccak256>(&data)[..]);

        let mut h = Sha3::new(48, SpongePadding::Sha3).unwrap();
        h.update(&data).unwrap();
        let digest = h.finalize().unwrap();
        prop_assert_eq!(digest.as_bytes(), &reference::<sha3::Sha3_384>(&data)[..]);
    }
}

#[test]
fn rate_boundaries_match_sha3_crate() {
    for rate in [72usize, 104, 136, 144] {
        for len in [rate - 1, rate, rate + 1, 2 * rate - 1, 2 * rate, 2 * rate + 1] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(ours::<Sha3_224>(&data), reference::<sha3::Sha3_224>(&data), "len {}", len);
            assert_eq!(ours::<Sha3_256>(&data), reference::<sha3::Sha3_256>(&data), "len {}", len);
            assert_eq!(ours::<Keccak384>(&data), reference::<sha3::Keccak384>(&data), "len {}", len);
            assert_eq!(ours::<Keccak512>(&data), reference::<sha3::Keccak512>(&data), "len {}", len);
        }
    }
}
