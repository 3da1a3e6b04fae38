//! An implementation of the [MD4][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use mdkit_md4::{Md4, Digest};
//! use hex_literal::hex;
//!
//! let mut hasher = Md4::new();
//! hasher.update(b"abc");
//! assert_eq!(hasher.finalize()[..], hex!("a448017aaf21d8525fc10ae87aa6729d"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/MD4

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};
pub use mdkit::Hasher;

use digest::consts::U16;
use digest::core_api::CoreWrapper;
use digest::{Output, OutputSizeUser};
use mdkit::bits::{ch, maj, parity};
use mdkit::{Compress, Engine, Padding, BLOCK_WORDS};

const S0: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

const K: [u32; 3] = [0, 0x5A82_7999, 0x6ED9_EBA1];

#[rustfmt::skip]
const SHIFTS: [[u32; 4]; 3] = [
    [3, 7, 11, 19],
    [3, 5, 9, 13],
    [3, 9, 11, 15],
];

#[rustfmt::skip]
const ORDER: [[usize; 16]; 3] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15],
    [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15],
];

fn compress(state: [u32; 4], x: &[u32; BLOCK_WORDS]) -> [u32; 4] {
    let [mut a, mut b, mut c, mut d] = state;
    for round in 0..3 {
        for (step, &k) in ORDER[round].iter().enumerate() {
            let f = match round {
                0 => ch(b, c, d),
                1 => maj(b, c, d),
                _ => parity(b, c, d),
            };
            let t = a
                .wrapping_add(f)
                .wrapping_add(x[k])
                .wrapping_add(K[round])
                .rotate_left(SHIFTS[round][step % 4]);
            a = d;
            d = c;
            c = b;
            b = t;
        }
    }
    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
    ]
}

/// MD4 compression function and constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md4Core;

impl OutputSizeUser for Md4Core {
    type OutputSize = U16;
}

impl Compress for Md4Core {
    type State = [u32; 4];
    const NAME: &'static str = "MD4";
    const PADDING: Padding = Padding::LITTLE_ENDIAN;

    #[inline]
    fn initial_state() -> Self::State {
        S0
    }

    #[inline]
    fn process_block(state: Self::State, block: &[u32; BLOCK_WORDS]) -> Self::State {
        compress(state, block)
    }

    #[inline]
    fn write_digest(state: &Self::State, out: &mut Output<Self>) {
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

/// MD4 hasher state.
pub type Md4 = CoreWrapper<Engine<Md4Core>>;
