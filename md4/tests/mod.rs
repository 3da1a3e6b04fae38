use std::io::{self, Read};

use digest::dev::fixed_reset_test;
use hex_literal::hex;
use mdkit::KnownLength;
use mdkit_md4::{Digest, Hasher, Md4, Md4Core};
use proptest::prelude::*;

// RFC 1320, appendix A.5
const VECTORS: &[(&[u8], [u8; 16])] = &[
    (b"", hex!("31d6cfe0d16ae931b73c59d7e0c089c0")),
    (b"a", hex!("bde52cb31de33e46245e05fbdbd6fb24")),
    (b"abc", hex!("a448017aaf21d8525fc10ae87aa6729d")),
    (b"message digest", hex!("d9130a8164549fe818874806e1c7014b")),
    (b"abcdefghijklmnopqrstuvwxyz", hex!("d79e1c308aa5bbcdeea8ed63df412da9")),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex!("043f8582f241db351ce627e153e7f0e4"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex!("e33b4ddc9c38f2199c3e7b164fcc0536"),
    ),
];

#[test]
fn known_answers() {
    for (input, expected) in VECTORS {
        assert_eq!(Md4Core::hash(input)[..], expected[..]);
        assert_eq!(Md4Core::hash_stream(&mut &input[..]).unwrap()[..], expected[..]);
        assert_eq!(fixed_reset_test::<Md4>(input, expected), None);
    }
}

#[test]
fn long_stream_matches_buffer() {
    let data = vec![b'a'; 1_000_000];
    let mut stream = KnownLength::new(io::repeat(b'a').take(1_000_000), 1_000_000);
    let streamed = Md4Core::hash_stream(&mut stream).unwrap();
    assert_eq!(streamed, Md4Core::hash(&data));
    assert_eq!(streamed[..], <md4::Md4 as Digest>::digest(&data)[..]);
}

#[test]
fn identity() {
    assert_eq!(Md4Core::name(), "MD4");
    assert_eq!(Md4Core::HASH_LENGTH_BITS, 128);
}

proptest! {
    #[test]
    fn paths_match_reference(data in proptest::collection::vec(any::<u8>(), 0..4096), step in 1usize..130) {
        let expected = <md4::Md4 as Digest>::digest(&data);
        prop_assert_eq!(&Md4Core::hash(&data)[..], &expected[..]);
        prop_assert_eq!(&Md4Core::hash_stream(&mut &data[..]).unwrap()[..], &expected[..]);

        let mut hasher = Md4::new();
        for chunk in data.chunks(step) {
            hasher.update(chunk);
        }
        prop_assert_eq!(&hasher.finalize()[..], &expected[..]);
    }
}
