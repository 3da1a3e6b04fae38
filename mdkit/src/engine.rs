//! Block-level driver shared by every input path.
//!
//! Buffered input, streamed input and the incremental [`Engine`] all end up
//! in [`compress_block`]; they differ only in where blocks come from and how
//! the end of the message is located.

use core::fmt;

use digest::block_buffer::Eager;
use digest::core_api::{
    AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, FixedOutputCore, UpdateCore,
};
use digest::typenum::U64;
use digest::{HashMarker, Output, OutputSizeUser, Reset};

use crate::endian::Word;
use crate::padding::{bit_length, PadCursor};
use crate::{Compress, Endian};

/// Size of a processing block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit message words in a block.
pub const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Pack a 64-byte block into message words.
#[inline]
pub fn pack_block(block: &[u8], order: Endian) -> [u32; BLOCK_WORDS] {
    debug_assert_eq!(block.len(), BLOCK_SIZE);
    let mut words = [0u32; BLOCK_WORDS];
    for (w, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_bytes(chunk, order);
    }
    words
}

/// Feed one 64-byte block through the compression function of `C`.
#[inline]
pub fn compress_block<C: Compress>(state: C::State, block: &[u8]) -> C::State {
    debug_assert_eq!(C::PADDING.block_size, BLOCK_SIZE, "{} pads to a foreign block size", C::NAME);
    C::process_block(state, &pack_block(block, C::PADDING.word_order))
}

/// Serialize a final state into a digest.
pub fn digest_of<C: Compress>(state: &C::State) -> Output<C> {
    let mut out = Output::<C>::default();
    C::write_digest(state, &mut out);
    out
}

/// Hash a fully buffered message.
///
/// The whole padded message is materialized before compression starts.
pub fn hash_buffer<C: Compress>(data: &[u8]) -> Output<C> {
    let padded = C::PADDING.pad(data);
    let state = padded
        .chunks_exact(BLOCK_SIZE)
        .fold(C::initial_state(), |state, block| compress_block::<C>(state, block));
    digest_of::<C>(&state)
}

/// Finish a message whose leading `block_len` blocks are already folded into
/// `state` and whose remaining bytes are `tail` (shorter than one block).
pub fn finalize_tail<C: Compress>(
    mut state: C::State,
    block_len: u64,
    tail: &[u8],
    out: &mut Output<C>,
) {
    let byte_len = block_len
        .wrapping_mul(BLOCK_SIZE as u64)
        .wrapping_add(tail.len() as u64);
    let mut cursor = PadCursor::new(C::PADDING, bit_length(byte_len));

    let mut block = [0u8; BLOCK_SIZE];
    let mut filled = tail.len().min(BLOCK_SIZE);
    block[..filled].copy_from_slice(&tail[..filled]);
    loop {
        let last = cursor.pad_block(&mut block, filled);
        state = compress_block::<C>(state, &block);
        if last {
            break;
        }
        block = [0u8; BLOCK_SIZE];
        filled = 0;
    }
    C::write_digest(&state, out);
}

/// Incremental hasher core for any [`Compress`] algorithm.
///
/// Wrap it in [`digest::core_api::CoreWrapper`] to get the [`digest::Digest`]
/// API.
pub struct Engine<C: Compress> {
    state: C::State,
    block_len: u64,
}

impl<C: Compress> Clone for Engine<C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            block_len: self.block_len,
        }
    }
}

impl<C: Compress> HashMarker for Engine<C> {}

impl<C: Compress> BlockSizeUser for Engine<C> {
    type BlockSize = U64;
}

impl<C: Compress> BufferKindUser for Engine<C> {
    type BufferKind = Eager;
}

impl<C: Compress> OutputSizeUser for Engine<C> {
    type OutputSize = C::OutputSize;
}

impl<C: Compress> UpdateCore for Engine<C> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        for block in blocks {
            self.state = compress_block::<C>(self.state, block);
        }
    }
}

impl<C: Compress> FixedOutputCore for Engine<C> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        finalize_tail::<C>(self.state, self.block_len, buffer.get_data(), out);
    }
}

impl<C: Compress> Default for Engine<C> {
    #[inline]
    fn default() -> Self {
        Self {
            state: C::initial_state(),
            block_len: 0,
        }
    }
}

impl<C: Compress> Reset for Engine<C> {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl<C: Compress> AlgorithmName for Engine<C> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(C::NAME)
    }
}

impl<C: Compress> fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(C::NAME)?;
        f.write_str(" Engine { ... }")
    }
}
