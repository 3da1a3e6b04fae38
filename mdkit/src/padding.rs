//! Merkle-Damgard strengthening.
//!
//! Every algorithm in this workspace pads the same way: a single `0x80` byte,
//! zero fill, and the bit length of the message as a 64-bit field at the end
//! of the last block. Only the byte order of the length field differs.

use alloc::vec::Vec;

use crate::endian::{Endian, Word};

/// Padding marker: a single `1` bit followed by seven zero bits.
pub const PADDING_BYTE: u8 = 0x80;

/// Padding parameters of one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    /// Size of a processing block in bytes.
    pub block_size: usize,
    /// Size of the trailing length field in bytes.
    pub length_size: usize,
    /// Byte order of the length field.
    pub length_order: Endian,
    /// Byte order used to assemble message words from a block.
    pub word_order: Endian,
}

impl Padding {
    /// 64-byte blocks, little-endian words and length (MD4, MD5, RIPEMD).
    pub const LITTLE_ENDIAN: Self = Self::new(64, 8, Endian::Little, Endian::Little);

    /// 64-byte blocks, big-endian words and length (SHA-1, SHA-2).
    pub const BIG_ENDIAN: Self = Self::new(64, 8, Endian::Big, Endian::Big);

    /// Create padding parameters.
    ///
    /// Panics if `length_size` is not smaller than `block_size`.
    pub const fn new(
        block_size: usize,
        length_size: usize,
        length_order: Endian,
        word_order: Endian,
    ) -> Self {
        assert!(length_size < block_size, "length field must fit in a block");
        Self {
            block_size,
            length_size,
            length_order,
            word_order,
        }
    }

    /// Length of the padded message for an input of `len` bytes.
    ///
    /// This is the smallest multiple of the block size that leaves room for
    /// the padding byte and the length field.
    pub fn padded_len(&self, len: usize) -> usize {
        let bs = self.block_size;
        let target = bs - self.length_size;
        let min = len + 1;
        min + (target + bs - min % bs) % bs + self.length_size
    }

    /// Pad a fully buffered message.
    ///
    /// The returned buffer is always a whole number of blocks. An empty
    /// message yields exactly one block.
    pub fn pad(&self, message: &[u8]) -> Vec<u8> {
        let len = message.len();
        let mut out = alloc::vec![0u8; self.padded_len(len)];
        out[..len].copy_from_slice(message);
        out[len] = PADDING_BYTE;

        let field = out.len() - self.length_size;
        self.write_length(&mut out[field..], bit_length(len as u64));
        out
    }

    /// Write `bit_len` into `field` in the length byte order.
    ///
    /// Fields wider than eight bytes are zero-extended.
    pub fn write_length(&self, field: &mut [u8], bit_len: u64) {
        for b in field.iter_mut() {
            *b = 0;
        }
        let width = field.len();
        if width >= 8 {
            let at = match self.length_order {
                Endian::Big => width - 8,
                Endian::Little => 0,
            };
            bit_len.write_bytes(&mut field[at..], self.length_order);
        } else {
            // narrow fields keep the low-order bytes
            let bytes = match self.length_order {
                Endian::Big => bit_len.to_be_bytes(),
                Endian::Little => bit_len.to_le_bytes(),
            };
            let src = match self.length_order {
                Endian::Big => &bytes[8 - width..],
                Endian::Little => &bytes[..width],
            };
            field.copy_from_slice(src);
        }
    }
}

/// Message length in bits; wraps modulo 2^64 like every length field here.
#[inline]
pub fn bit_length(byte_len: u64) -> u64 {
    byte_len.wrapping_mul(8)
}

/// Places the padding byte and the length footer into blocks that are
/// produced one at a time, when the message end is only discovered while
/// reading.
///
/// The cursor starts with nothing injected. Each call to
/// [`PadCursor::pad_block`] receives a block holding `filled` message bytes
/// followed by zeros. The padding byte goes right after the first short
/// block's data; the footer goes into the first block that still has
/// `length_size` zero bytes after the padding byte. That block is the last
/// one.
#[derive(Clone, Copy, Debug)]
pub struct PadCursor {
    padding: Padding,
    bit_len: u64,
    padding_injected: bool,
    done: bool,
}

impl PadCursor {
    /// Start padding a message of `bit_len` bits.
    pub fn new(padding: Padding, bit_len: u64) -> Self {
        Self {
            padding,
            bit_len,
            padding_injected: false,
            done: false,
        }
    }

    /// Whether the padding byte has been placed.
    pub fn padding_injected(&self) -> bool {
        self.padding_injected
    }

    /// Whether the length footer has been placed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Pad `block` in place and report whether it is the final block.
    ///
    /// `block` must be `block_size` bytes long with zeros after `filled`.
    pub fn pad_block(&mut self, block: &mut [u8], filled: usize) -> bool {
        if self.done {
            return true;
        }
        let mut fill_point = filled;
        if filled < block.len() && !self.padding_injected {
            block[filled] = PADDING_BYTE;
            self.padding_injected = true;
            fill_point = filled + 1;
        }
        let footer = block.len().saturating_sub(self.padding.length_size);
        if self.padding_injected && fill_point <= footer {
            self.padding.write_length(&mut block[footer..], self.bit_len);
            self.done = true;
        }
        self.done
    }
}
