//! Merkle-Damgard machinery shared by the `mdkit` hash crates.
//!
//! An algorithm supplies its constants and a pure compression function by
//! implementing [`Compress`]. In return it gets:
//!
//! * one-shot hashing of buffers through [`Hasher::hash`],
//! * constant-memory hashing of readers through [`Hasher::hash_stream`]
//!   (requires the `std` feature),
//! * the incremental [`digest::Digest`] API through [`Engine`] wrapped in
//!   [`digest::core_api::CoreWrapper`].
//!
//! All three feed blocks into the same [`Compress::process_block`], so they
//! agree on every input.
//!
//! # Usage
//!
//! ```rust
//! use mdkit::{Compress, Endian, Hasher, Padding, BLOCK_WORDS};
//! use mdkit::digest::{consts::U4, Output, OutputSizeUser};
//!
//! /// Toy algorithm: xor of every message word.
//! struct XorSum;
//!
//! impl OutputSizeUser for XorSum {
//!     type OutputSize = U4;
//! }
//!
//! impl Compress for XorSum {
//!     type State = u32;
//!     const NAME: &'static str = "XOR-32";
//!     const PADDING: Padding = Padding::BIG_ENDIAN;
//!
//!     fn initial_state() -> u32 {
//!         0
//!     }
//!
//!     fn process_block(state: u32, block: &[u32; BLOCK_WORDS]) -> u32 {
//!         block.iter().fold(state, |acc, w| acc ^ w)
//!     }
//!
//!     fn write_digest(state: &u32, out: &mut Output<Self>) {
//!         out.copy_from_slice(&state.to_be_bytes());
//!     }
//! }
//!
//! let digest = XorSum::hash(b"abc");
//! assert_eq!(XorSum::HASH_LENGTH_BITS, 32);
//! assert_eq!(digest[..], [0x61, 0x62, 0x63, 0x80 ^ 0x18][..]);
//! # #[cfg(feature = "std")]
//! assert_eq!(XorSum::hash_stream(&mut &b"abc"[..]).unwrap(), digest);
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest;

pub mod bits;
pub mod endian;
mod engine;
mod error;
pub mod padding;
#[cfg(feature = "std")]
mod stream;

pub use crate::endian::Endian;
pub use crate::engine::{
    compress_block, digest_of, finalize_tail, hash_buffer, pack_block, Engine, BLOCK_SIZE,
    BLOCK_WORDS,
};
pub use crate::error::Error;
pub use crate::padding::{PadCursor, Padding};
#[cfg(feature = "std")]
pub use crate::stream::{hash_stream, KnownLength, MessageStream};

use digest::typenum::Unsigned;
use digest::{Output, OutputSizeUser};

/// Per-algorithm compression function and constants.
///
/// `process_block` must be a pure function of its arguments: every input
/// path calls it, and they only agree if it has no hidden state.
pub trait Compress: OutputSizeUser {
    /// Chaining value carried from block to block.
    type State: Copy;

    /// Human-readable algorithm name, e.g. `"SHA2-224"`.
    const NAME: &'static str;

    /// Padding and word-order parameters. `block_size` must be
    /// [`BLOCK_SIZE`].
    const PADDING: Padding;

    /// State before the first block.
    fn initial_state() -> Self::State;

    /// Fold one block of message words into `state`.
    fn process_block(state: Self::State, block: &[u32; BLOCK_WORDS]) -> Self::State;

    /// Serialize the final state into a digest.
    fn write_digest(state: &Self::State, out: &mut Output<Self>);
}

/// The operations every algorithm offers.
///
/// Implemented for every [`Compress`] type.
pub trait Hasher: Compress + Sized {
    /// Digest length in bits.
    const HASH_LENGTH_BITS: usize = <<Self as OutputSizeUser>::OutputSize as Unsigned>::USIZE * 8;

    /// Human-readable algorithm name.
    fn name() -> &'static str {
        Self::NAME
    }

    /// Hash an in-memory message.
    fn hash(data: &[u8]) -> Output<Self> {
        hash_buffer::<Self>(data)
    }

    /// Hash everything a stream yields, in constant memory.
    #[cfg(feature = "std")]
    fn hash_stream<S: MessageStream + ?Sized>(stream: &mut S) -> Result<Output<Self>, Error> {
        hash_stream::<Self, S>(stream)
    }
}

impl<C: Compress> Hasher for C {}
