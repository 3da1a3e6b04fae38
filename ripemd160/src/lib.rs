//! An implementation of the [RIPEMD-160][1] cryptographic hash.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use mdkit_ripemd160::{Digest, Hasher, Ripemd160, Ripemd160Core};
//!
//! // create a RIPEMD-160 hasher instance
//! let mut hasher = Ripemd160::new();
//!
//! // process input message
//! hasher.update(b"Hello world!");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
//!
//! // the one-shot form gives the same answer
//! assert_eq!(Ripemd160Core::hash(b"Hello world!"), result);
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/RIPEMD

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};
pub use mdkit::Hasher;

use digest::consts::U20;
use digest::core_api::CoreWrapper;
use digest::{Output, OutputSizeUser};
use mdkit::{Compress, Engine, Padding, BLOCK_WORDS};

mod block;
use block::{compress, DIGEST_BUF_LEN, H0};

/// RIPEMD-160 compression function and constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ripemd160Core;

impl OutputSizeUser for Ripemd160Core {
    type OutputSize = U20;
}

impl Compress for Ripemd160Core {
    type State = [u32; DIGEST_BUF_LEN];
    const NAME: &'static str = "RIPEMD-160";
    const PADDING: Padding = Padding::LITTLE_ENDIAN;

    #[inline]
    fn initial_state() -> Self::State {
        H0
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

/// RIPEMD-160 hasher state.
pub type Ripemd160 = CoreWrapper<Engine<Ripemd160Core>>;
