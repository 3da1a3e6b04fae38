//! Hashing readers of known length in constant memory.

use std::fs::File;
use std::io::{self, Cursor, Empty, Read, Seek};

use digest::Output;

use crate::engine::{compress_block, digest_of, BLOCK_SIZE};
use crate::padding::{bit_length, PadCursor};
use crate::{Compress, Error};

/// A byte source that can say up front how many bytes it will yield.
///
/// The length footer is written into the block that holds (or follows) the
/// end of the message, so it has to be known before the last read.
pub trait MessageStream: Read {
    /// Number of bytes left to read, or `None` if the stream cannot tell.
    fn total_len(&mut self) -> Option<u64>;

    /// Whether the stream supports reading at all.
    ///
    /// Handles that know they were opened without read access should return
    /// `false`.
    fn is_readable(&self) -> bool {
        true
    }
}

impl MessageStream for &[u8] {
    fn total_len(&mut self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl<T: AsRef<[u8]>> MessageStream for Cursor<T> {
    fn total_len(&mut self) -> Option<u64> {
        let len = self.get_ref().as_ref().len() as u64;
        Some(len.saturating_sub(self.position()))
    }
}

impl MessageStream for Empty {
    fn total_len(&mut self) -> Option<u64> {
        Some(0)
    }
}

impl MessageStream for File {
    fn total_len(&mut self) -> Option<u64> {
        let len = self.metadata().ok()?.len();
        let pos = self.stream_position().ok()?;
        Some(len.saturating_sub(pos))
    }

    fn is_readable(&self) -> bool {
        // an empty read is refused by handles opened without read access
        match (&*self).read(&mut []) {
            Ok(_) => true,
            Err(err) => err.kind() == io::ErrorKind::Interrupted,
        }
    }
}

impl MessageStream for io::Stdin {
    fn total_len(&mut self) -> Option<u64> {
        None
    }
}

impl<S: MessageStream + ?Sized> MessageStream for &mut S {
    fn total_len(&mut self) -> Option<u64> {
        (**self).total_len()
    }

    fn is_readable(&self) -> bool {
        (**self).is_readable()
    }
}

/// Attach a declared length to any reader.
///
/// Useful for sockets, pipes or generated data whose length is known from
/// elsewhere (a header, a `Content-Length`, a loop bound).
#[derive(Debug)]
pub struct KnownLength<R> {
    inner: R,
    len: u64,
}

impl<R: Read> KnownLength<R> {
    /// Wrap `inner`, which will yield exactly `len` bytes.
    pub fn new(inner: R, len: u64) -> Self {
        Self { inner, len }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for KnownLength<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> MessageStream for KnownLength<R> {
    fn total_len(&mut self) -> Option<u64> {
        Some(self.len)
    }
}

/// Reads whole blocks, looping over short reads until the block is full or
/// the reader reports end of input.
struct BlockReader<'a, S: ?Sized> {
    inner: &'a mut S,
    consumed: u64,
    eof: bool,
}

impl<'a, S: Read + ?Sized> BlockReader<'a, S> {
    fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            consumed: 0,
            eof: false,
        }
    }

    /// Zero `block`, fill it from the reader and return the byte count.
    fn read_block(&mut self, block: &mut [u8; BLOCK_SIZE]) -> Result<usize, Error> {
        *block = [0u8; BLOCK_SIZE];
        let mut filled = 0;
        while filled < BLOCK_SIZE && !self.eof {
            match self.inner.read(&mut block[filled..]) {
                Ok(0) => self.eof = true,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        self.consumed += filled as u64;
        Ok(filled)
    }
}

/// Hash everything `stream` yields.
///
/// Memory use is one block and one state regardless of the stream length.
pub fn hash_stream<C, S>(stream: &mut S) -> Result<Output<C>, Error>
where
    C: Compress,
    S: MessageStream + ?Sized,
{
    if !stream.is_readable() {
        return Err(Error::StreamUnreadable);
    }
    let declared = stream.total_len().ok_or(Error::LengthRequired)?;

    let mut reader = BlockReader::new(stream);
    let mut cursor = PadCursor::new(C::PADDING, bit_length(declared));
    let mut state = C::initial_state();
    let mut block = [0u8; BLOCK_SIZE];

    loop {
        let filled = reader.read_block(&mut block)?;
        if reader.consumed > declared || (reader.eof && reader.consumed != declared) {
            return Err(Error::LengthMismatch {
                declared,
                actual: reader.consumed,
            });
        }
        let last = cursor.pad_block(&mut block, filled);
        state = compress_block::<C>(state, &block);
        if last {
            break;
        }
    }
    Ok(digest_of::<C>(&state))
}
