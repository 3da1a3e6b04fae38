//! Explicit-endian packing of 32- and 64-bit words.
//!
//! Byte order is always chosen by the caller; nothing here depends on the
//! host's native endianness.

use alloc::vec::Vec;

use crate::Error;

/// Byte order used to assemble words or serialize a length field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Unsigned word that can be assembled from, and serialized into, bytes.
pub trait Word: Copy + Default {
    /// Width of the word in bytes.
    const SIZE: usize;

    /// Assemble a word from `bytes`.
    ///
    /// `bytes` is expected to hold exactly [`Word::SIZE`] bytes; a shorter
    /// slice is read as if it were zero-extended at its most significant end.
    fn from_bytes(bytes: &[u8], order: Endian) -> Self;

    /// Serialize the word into the first [`Word::SIZE`] bytes of `out`.
    fn write_bytes(self, out: &mut [u8], order: Endian);
}

macro_rules! impl_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const SIZE: usize = core::mem::size_of::<$t>();

            #[inline(always)]
            fn from_bytes(bytes: &[u8], order: Endian) -> Self {
                match order {
                    Endian::Big => bytes
                        .iter()
                        .fold(0, |acc: $t, &b| (acc << 8) | <$t>::from(b)),
                    Endian::Little => bytes
                        .iter()
                        .rev()
                        .fold(0, |acc: $t, &b| (acc << 8) | <$t>::from(b)),
                }
            }

            #[inline(always)]
            fn write_bytes(self, out: &mut [u8], order: Endian) {
                let bytes = match order {
                    Endian::Big => self.to_be_bytes(),
                    Endian::Little => self.to_le_bytes(),
                };
                for (o, b) in out.iter_mut().zip(bytes.iter()) {
                    *o = *b;
                }
            }
        }
    )*};
}

impl_word!(u32, u64);

/// Convert a byte sequence into words of type `W`.
///
/// Fails with [`Error::InvalidLength`] if `bytes.len()` is not a multiple of
/// the word size.
pub fn bytes_to_words<W: Word>(bytes: &[u8], order: Endian) -> Result<Vec<W>, Error> {
    if bytes.len() % W::SIZE != 0 {
        return Err(Error::InvalidLength {
            unit: W::SIZE,
            len: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(W::SIZE)
        .map(|chunk| W::from_bytes(chunk, order))
        .collect())
}

/// Fill `words` from `bytes`, which must hold exactly `words.len()` words.
pub fn read_words<W: Word>(bytes: &[u8], order: Endian, words: &mut [W]) -> Result<(), Error> {
    if bytes.len() != words.len() * W::SIZE {
        return Err(Error::InvalidLength {
            unit: words.len() * W::SIZE,
            len: bytes.len(),
        });
    }
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::SIZE)) {
        *w = W::from_bytes(chunk, order);
    }
    Ok(())
}

/// Serialize words into a freshly allocated byte vector.
pub fn words_to_bytes<W: Word>(words: &[W], order: Endian) -> Vec<u8> {
    let mut out = alloc::vec![0u8; words.len() * W::SIZE];
    for (chunk, w) in out.chunks_exact_mut(W::SIZE).zip(words.iter()) {
        w.write_bytes(chunk, order);
    }
    out
}
