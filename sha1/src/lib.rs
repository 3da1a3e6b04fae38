//! An implementation of the [SHA-1][1] cryptographic hash algorithm.
//!
//! SHA-1 is broken for collision resistance; it is provided for interop
//! with existing formats only.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use mdkit_sha1::{Digest, Hasher, Sha1, Sha1Core};
//!
//! let mut hasher = Sha1::new();
//! hasher.update(b"hello world");
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
//! assert_eq!(Sha1Core::hash(b"hello world"), result);
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-1

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

mod compress;
mod consts;

use consts::{H, STATE_LEN};

/// SHA-1 compression function and constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1Core;

impl OutputSizeUser for Sha1Core {
    type OutputSize = U20;
}

impl Compress for Sha1Core {
    type State = [u32; STATE_LEN];
    const NAME: &'static str = "SHA-1";
    const PADDING: Padding = Padding::BIG_ENDIAN;

    #[inline]
    fn initial_state() -> Self::State {
        H
    }

    #[inline]
    fn process_block(state: Self::State, block: &[u32; BLOCK_WORDS]) -> Self::State {
        compress::compress(state, block)
    }

    #[inline]
    fn write_digest(state: &Self::State, out: &mut Output<Self>) {
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

/// SHA-1 hasher state.
pub type Sha1 = CoreWrapper<Engine<Sha1Core>>;
