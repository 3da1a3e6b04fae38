use std::io::{self, Read};

use digest::dev::fixed_reset_test;
use hex_literal::hex;
use mdkit::KnownLength;
use mdkit_sha1::{Digest, Hasher, Sha1, Sha1Core};
use proptest::prelude::*;

const VECTORS: &[(&[u8], [u8; 20])] = &[
    (b"abc", hex!("a9993e364706816aba3e25717850c26c9cd0d89d")),
    (b"", hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
    ),
    (
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        hex!("a49b2446a02c645bf419f995b67091253a04a259"),
    ),
];

#[test]
fn known_answers() {
    for (input, expected) in VECTORS {
        assert_eq!(Sha1Core::hash(input)[..], expected[..]);
        assert_eq!(Sha1Core::hash_stream(&mut &input[..]).unwrap()[..], expected[..]);
        assert_eq!(fixed_reset_test::<Sha1>(input, expected), None);
    }
}

#[test]
fn one_million_a() {
    let expected = hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    let mut stream = KnownLength::new(io::repeat(b'a').take(1_000_000), 1_000_000);
    assert_eq!(Sha1Core::hash_stream(&mut stream).unwrap()[..], expected[..]);
    assert_eq!(Sha1Core::hash(&vec![b'a'; 1_000_000])[..], expected[..]);
}

#[test]
fn identity() {
    assert_eq!(Sha1Core::name(), "SHA-1");
    assert_eq!(Sha1Core::HASH_LENGTH_BITS, 160);
}

proptest! {
    #[test]
    fn paths_match_reference(data in proptest::collection::vec(any::<u8>(), 0..4096), step in 1usize..130) {
        let expected = <sha1::Sha1 as Digest>::digest(&data);
        prop_assert_eq!(&Sha1Core::hash(&data)[..], &expected[..]);
        prop_assert_eq!(&Sha1Core::hash_stream(&mut &data[..]).unwrap()[..], &expected[..]);

        let mut hasher = Sha1::new();
        for chunk in data.chunks(step) {
            hasher.update(chunk);
        }
        prop_assert_eq!(&hasher.finalize()[..], &expected[..]);
    }
}
