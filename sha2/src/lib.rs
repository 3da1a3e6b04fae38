//! An implementation of the [SHA-2][1] cryptographic hash algorithms.
//!
//! There are two algorithms in this crate, both sharing the 32-bit SHA-256
//! compression function:
//!
//! * `SHA2-224`, which starts from its own initial state and keeps only the
//!   first seven state words,
//! * `SHA2-256`.
//!
//! # Usage
//!
//! One-shot hashing goes through the [`Hasher`] contract on the core types:
//!
//! ```rust
//! use hex_literal::hex;
//! use mdkit_sha2::{Hasher, Sha224Core};
//!
//! let digest = Sha224Core::hash(b"abc");
//! assert_eq!(digest[..], hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"));
//!
//! // any reader that knows its length can be hashed in constant memory
//! let streamed = Sha224Core::hash_stream(&mut &b"abc"[..]).unwrap();
//! assert_eq!(streamed, digest);
//! ```
//!
//! Incremental hashing uses the [`Digest`] trait:
//!
//! ```rust
//! use hex_literal::hex;
//! use mdkit_sha2::{Digest, Sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};
pub use mdkit::Hasher;

use digest::consts::{U28, U32};
use digest::core_api::CoreWrapper;
#[cfg(feature = "compress")]
use digest::{consts::U64, generic_array::GenericArray};
use digest::{Output, OutputSizeUser};
use mdkit::{Compress, Engine, Padding, BLOCK_WORDS};

mod consts;
mod sha256;

use consts::{H224, H256, STATE_LEN};

fn write_be(state: &[u32; STATE_LEN], out: &mut [u8]) {
    for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&v.to_be_bytes());
    }
}

/// SHA2-224 compression function and constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha224Core;

impl OutputSizeUser for Sha224Core {
    type OutputSize = U28;
}

impl Compress for Sha224Core {
    type State = [u32; STATE_LEN];
    const NAME: &'static str = "SHA2-224";
    const PADDING: Padding = Padding::BIG_ENDIAN;

    #[inline]
    fn initial_state() -> Self::State {
        H224
    }

    #[inline]
    fn process_block(state: Self::State, block: &[u32; BLOCK_WORDS]) -> Self::State {
        sha256::process_block(state, block)
    }

    #[inline]
    fn write_digest(state: &Self::State, out: &mut Output<Self>) {
        // 224 bits: the eighth word is dropped
        write_be(state, out);
    }
}

/// SHA2-256 compression function and constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Core;

impl OutputSizeUser for Sha256Core {
    type OutputSize = U32;
}

impl Compress for Sha256Core {
    type State = [u32; STATE_LEN];
    const NAME: &'static str = "SHA2-256";
    const PADDING: Padding = Padding::BIG_ENDIAN;

    #[inline]
    fn initial_state() -> Self::State {
        H256
    }

    #[inline]
    fn process_block(state: Self::State, block: &[u32; BLOCK_WORDS]) -> Self::State {
        sha256::process_block(state, block)
    }

    #[inline]
    fn write_digest(state: &Self::State, out: &mut Output<Self>) {
        write_be(state, out);
    }
}

/// SHA2-224 hasher state.
pub type Sha224 = CoreWrapper<Engine<Sha224Core>>;

/// SHA2-256 hasher state.
pub type Sha256 = CoreWrapper<Engine<Sha256Core>>;

/// SHA-256 compression function.
///
/// Folds whole 64-byte blocks into `state` without any padding.
#[cfg(feature = "compress")]
pub fn compress256(state: &mut [u32; 8], blocks: &[GenericArray<u8, U64>]) {
    for block in blocks {
        let words = mdkit::pack_block(block, Padding::BIG_ENDIAN.word_order);
        *state = sha256::process_block(*state, &words);
    }
}
