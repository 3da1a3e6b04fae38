//! An implementation of the [MD5][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use mdkit_md5::{Md5, Digest};
//! use hex_literal::hex;
//!
//! // create a Md5 hasher instance
//! let mut hasher = Md5::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("5eb63bbbe01eeed093cb22bb8f5acdc3"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/MD5

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod consts;
mod utils;

pub use digest::{self, Digest};
pub use mdkit::Hasher;

use crate::consts::{S0, STATE_LEN};
use crate::utils::compress;

use digest::consts::U16;
use digest::core_api::CoreWrapper;
use digest::{Output, OutputSizeUser};
use mdkit::{Compress, Engine, Padding, BLOCK_WORDS};

/// MD5 compression function and constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Core;

impl OutputSizeUser for Md5Core {
    type OutputSize = U16;
}

impl Compress for Md5Core {
    type State = [u32; STATE_LEN];
    const NAME: &'static str = "MD5";
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

/// MD5 hasher state.
pub type Md5 = CoreWrapper<Engine<Md5Core>>;
