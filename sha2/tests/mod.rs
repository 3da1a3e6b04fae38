use std::io::{self, Read};

use digest::dev::fixed_reset_test;
use hex_literal::hex;
use mdkit::KnownLength;
use mdkit_sha2::{Digest, Hasher, Sha224, Sha224Core, Sha256, Sha256Core};
use proptest::prelude::*;

// FIPS 180-2 / NIST examples, https://www.di-mgt.com.au/sha_testvectors.html
const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

const SHA224_VECTORS: &[(&[u8], [u8; 28])] = &[
    (b"", hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")),
    (b"abc", hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")),
    (MSG_448, hex!("75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525")),
    (MSG_896, hex!("c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3")),
];

const SHA256_VECTORS: &[(&[u8], [u8; 32])] = &[
    (b"", hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")),
    (b"abc", hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")),
    (MSG_448, hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")),
    (MSG_896, hex!("cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1")),
];

fn one_million_a() -> KnownLength<io::Take<io::Repeat>> {
    KnownLength::new(io::repeat(b'a').take(1_000_000), 1_000_000)
}

#[test]
fn sha224_known_answers() {
    for (input, expected) in SHA224_VECTORS {
        assert_eq!(Sha224Core::hash(input)[..], expected[..]);
        assert_eq!(Sha224Core::hash_stream(&mut &input[..]).unwrap()[..], expected[..]);
        assert_eq!(fixed_reset_test::<Sha224>(input, expected), None);
    }
}

#[test]
fn sha256_known_answers() {
    for (input, expected) in SHA256_VECTORS {
        assert_eq!(Sha256Core::hash(input)[..], expected[..]);
        assert_eq!(Sha256Core::hash_stream(&mut &input[..]).unwrap()[..], expected[..]);
        assert_eq!(fixed_reset_test::<Sha256>(input, expected), None);
    }
}

#[test]
fn sha224_one_million_a() {
    let expected = hex!("20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67");
    assert_eq!(Sha224Core::hash(&vec![b'a'; 1_000_000])[..], expected[..]);
    assert_eq!(Sha224Core::hash_stream(&mut one_million_a()).unwrap()[..], expected[..]);
}

#[test]
fn sha256_one_million_a() {
    let expected = hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0");
    assert_eq!(Sha256Core::hash(&vec![b'a'; 1_000_000])[..], expected[..]);
    assert_eq!(Sha256Core::hash_stream(&mut one_million_a()).unwrap()[..], expected[..]);
}

#[test]
fn identity() {
    assert_eq!(Sha224Core::name(), "SHA2-224");
    assert_eq!(Sha224Core::HASH_LENGTH_BITS, 224);
    assert_eq!(Sha256Core::name(), "SHA2-256");
    assert_eq!(Sha256Core::HASH_LENGTH_BITS, 256);
    assert!(format!("{:?}", Sha224::new()).starts_with("SHA2-224"));
}

#[test]
fn deterministic_and_fixed_length() {
    for len in [0usize, 1, 55, 56, 64, 1000].iter().copied() {
        let data = vec![0x3cu8; len];
        let first = Sha224Core::hash(&data);
        assert_eq!(first.len(), 28);
        assert_eq!(Sha224Core::hash(&data), first);
        assert_eq!(Sha256Core::hash(&data).len(), 32);
    }
}

fn differing_bits(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn avalanche_smoke() {
    let base = *b"The quick brown fox jumps over the lazy dog";
    let reference = Sha224Core::hash(&base);
    for bit in [0usize, 7, 100, 343].iter().copied() {
        let mut flipped = base;
        flipped[bit / 8] ^= 1 << (bit % 8);
        let changed = differing_bits(&reference, &Sha224Core::hash(&flipped));
        assert!((56..=168).contains(&changed), "bit {} changed {} of 224", bit, changed);
    }
}

#[cfg(feature = "compress")]
#[test]
fn compress256_matches_padded_hash() {
    use digest::generic_array::GenericArray;

    let mut block = GenericArray::default();
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[63] = 0x18;
    let mut state = [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ];
    mdkit_sha2::compress256(&mut state, &[block]);
    let mut out = [0u8; 32];
    for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&v.to_be_bytes());
    }
    assert_eq!(out, SHA256_VECTORS[1].1);
}

proptest! {
    #[test]
    fn sha224_paths_match_reference(data in proptest::collection::vec(any::<u8>(), 0..4096), step in 1usize..130) {
        let expected = <sha2::Sha224 as Digest>::digest(&data);
        prop_assert_eq!(&Sha224Core::hash(&data)[..], &expected[..]);
        prop_assert_eq!(&Sha224Core::hash_stream(&mut &data[..]).unwrap()[..], &expected[..]);

        let mut hasher = Sha224::new();
        for chunk in data.chunks(step) {
            hasher.update(chunk);
        }
        prop_assert_eq!(&hasher.finalize()[..], &expected[..]);
    }

    #[test]
    fn sha256_paths_match_reference(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let expected = <sha2::Sha256 as Digest>::digest(&data);
        prop_assert_eq!(&Sha256Core::hash(&data)[..], &expected[..]);
        prop_assert_eq!(&Sha256Core::hash_stream(&mut &data[..]).unwrap()[..], &expected[..]);
    }
}
