use mdkit::bits::{ch, choose_z, parity, xor_or_not};
use mdkit::BLOCK_WORDS;

pub const DIGEST_BUF_LEN: usize = 5;

pub const H0: [u32; DIGEST_BUF_LEN] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

const ROUNDS: usize = 80;

/// One of the two parallel lines of the compression function.
struct Line {
    /// Message word selected at each step.
    r: [usize; ROUNDS],
    /// Left rotation at each step.
    s: [u32; ROUNDS],
    /// Additive constant per group of 16 steps.
    k: [u32; 5],
    /// Boolean function per group of 16 steps.
    f: [usize; 5],
}

#[rustfmt::skip]
const LEFT: Line = Line {
    r: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
        7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
        3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
        1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
        4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
    ],
    s: [
        11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
        7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
        11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
        11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
        9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
    ],
    k: [0x0000_0000, 0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xa953_fd4e],
    f: [0, 1, 2, 3, 4],
};

#[rustfmt::skip]
const RIGHT: Line = Line {
    r: [
        5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
        6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
        15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
        8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
        12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
    ],
    s: [
        8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
        9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
        9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
        15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
        8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
    ],
    k: [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0x7a6d_76e9, 0x0000_0000],
    f: [4, 3, 2, 1, 0],
};

#[inline(always)]
fn boolean(which: usize, x: u32, y: u32, z: u32) -> u32 {
    match which {
        0 => parity(x, y, z),
        1 => ch(x, y, z),
        2 => xor_or_not(z, x, y),
        3 => choose_z(x, y, z),
        _ => xor_or_not(x, y, z),
    }
}

fn run(line: &Line, h: &[u32; DIGEST_BUF_LEN], x: &[u32; BLOCK_WORDS]) -> [u32; DIGEST_BUF_LEN] {
    let [mut a, mut b, mut c, mut d, mut e] = *h;
    for j in 0..ROUNDS {
        let group = j / 16;
        let t = a
            .wrapping_add(boolean(line.f[group], b, c, d))
            .wrapping_add(x[line.r[j]])
            .wrapping_add(line.k[group])
            .rotate_left(line.s[j])
            .wrapping_add(e);
        a = e;
        e = d;
        d = c.rotate_left(10);
        c = b;
        b = t;
    }
    [a, b, c, d, e]
}

/// Run both lines over one block of little-endian words and merge them
/// into the chaining value.
pub fn compress(h: [u32; DIGEST_BUF_LEN], x: &[u32; BLOCK_WORDS]) -> [u32; DIGEST_BUF_LEN] {
    let [al, bl, cl, dl, el] = run(&LEFT, &h, x);
    let [ar, br, cr, dr, er] = run(&RIGHT, &h, x);
    [
        h[1].wrapping_add(cl).wrapping_add(dr),
        h[2].wrapping_add(dl).wrapping_add(er),
        h[3].wrapping_add(el).wrapping_add(ar),
        h[4].wrapping_add(al).wrapping_add(br),
        h[0].wrapping_add(bl).wrapping_add(cr),
    ]
}
