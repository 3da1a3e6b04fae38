use mdkit::bits::{ch, choose_z, parity, xor_or_not};
use mdkit::BLOCK_WORDS;

use crate::consts::{K, S, STATE_LEN};

#[inline(always)]
fn round(i: usize, b: u32, c: u32, d: u32) -> (u32, usize) {
    match i / 16 {
        0 => (ch(b, c, d), i),
        1 => (choose_z(b, c, d), (5 * i + 1) % 16),
        2 => (parity(b, c, d), (3 * i + 5) % 16),
        _ => (xor_or_not(c, b, d), (7 * i) % 16),
    }
}

/// Fold one block of little-endian message words into `state`.
pub fn compress(state: [u32; STATE_LEN], m: &[u32; BLOCK_WORDS]) -> [u32; STATE_LEN] {
    let [mut a, mut b, mut c, mut d] = state;
    for i in 0..64 {
        let (f, g) = round(i, b, c, d);
        let rotated = a
            .wrapping_add(f)
            .wrapping_add(K[i])
            .wrapping_add(m[g])
            .rotate_left(S[i]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }
    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
    ]
}
