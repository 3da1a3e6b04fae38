#![allow(dead_code)]

use std::io::{self, Read};

use mdkit::digest::{consts::U12, Output, OutputSizeUser};
use mdkit::{Compress, Padding, BLOCK_WORDS};

/// Order-sensitive checksum of every block plus a block counter.
pub struct Tally;

impl OutputSizeUser for Tally {
    type OutputSize = U12;
}

impl Compress for Tally {
    type State = [u32; 3];
    const NAME: &'static str = "TALLY-96";
    const PADDING: Padding = Padding::LITTLE_ENDIAN;

    fn initial_state() -> [u32; 3] {
        [0, 0x0123_4567, 0x89ab_cdef]
    }

    fn process_block(state: [u32; 3], block: &[u32; BLOCK_WORDS]) -> [u32; 3] {
        let [count, mut a, mut b] = state;
        for &w in block.iter() {
            a = a.rotate_left(5) ^ w;
            b = b.wrapping_add(a).rotate_left(3);
        }
        [count + 1, a, b]
    }

    fn write_digest(state: &[u32; 3], out: &mut Output<Self>) {
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

/// Number of blocks compressed, read back from a `Tally` digest.
pub fn blocks(digest: &[u8]) -> u32 {
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Reader that hands out at most `step` bytes per call and interrupts every
/// other call.
pub struct Trickle<R> {
    pub inner: R,
    pub step: usize,
    pub calls: usize,
}

impl<R: Read> Read for Trickle<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls % 2 == 0 {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
        }
        let n = buf.len().min(self.step);
        self.inner.read(&mut buf[..n])
    }
}
