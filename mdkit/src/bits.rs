//! Bitwise round functions shared by the MD4 family.
//!
//! MD4, MD5, SHA-1, SHA-2 and RIPEMD-160 all draw their nonlinear functions
//! from this small set; each algorithm picks a subset and an argument order.

/// Bitwise choice: `x ? y : z` (SHA `Ch`, MD4/MD5 `F`, RIPEMD `f2`).
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Bitwise majority (SHA `Maj`, MD4 `G`).
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Bitwise parity (SHA-1 middle rounds, MD4/MD5 `H`, RIPEMD `f1`).
#[inline(always)]
pub fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Choice keyed on `z`: `z ? x : y` (MD5 `G`, RIPEMD `f4`).
#[inline(always)]
pub fn choose_z(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

/// `x ^ (y | !z)` (RIPEMD `f5`; MD5 `I` and RIPEMD `f3` with permuted
/// arguments).
#[inline(always)]
pub fn xor_or_not(x: u32, y: u32, z: u32) -> u32 {
    x ^ (y | !z)
}
