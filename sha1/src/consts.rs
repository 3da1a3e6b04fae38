#![allow(clippy::unreadable_literal)]

pub const STATE_LEN: usize = 5;

pub const H: [u32; STATE_LEN] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// One additive constant per 20-step round.
pub const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];
