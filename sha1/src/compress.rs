use mdkit::bits::{ch, maj, parity};
use mdkit::BLOCK_WORDS;

use crate::consts::{K, STATE_LEN};

fn schedule(block: &[u32; BLOCK_WORDS]) -> [u32; 80] {
    let mut w = [0u32; 80];
    w[..BLOCK_WORDS].copy_from_slice(block);
    for t in BLOCK_WORDS..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// SHA-1 compression of one block of big-endian message words.
pub fn compress(state: [u32; STATE_LEN], block: &[u32; BLOCK_WORDS]) -> [u32; STATE_LEN] {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = state;

    for (t, &wt) in w.iter().enumerate() {
        let f = match t / 20 {
            0 => ch(b, c, d),
            2 => maj(b, c, d),
            _ => parity(b, c, d),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    let mut out = state;
    for (s, v) in out.iter_mut().zip([a, b, c, d, e].iter()) {
        *s = s.wrapping_add(*v);
    }
    out
}
