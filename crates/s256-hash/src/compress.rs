//! # Compression Function
//!
//! Folds one block's message schedule into the running hash state through
//! 64 rounds over the working registers `a..h`. Control flow is identical
//! for every input: no branch depends on message or state data.

use crate::constants::{K, SCHEDULE_LEN, STATE_WORDS};

/// Σ0(a) = rotr(a, 2) ^ rotr(a, 13) ^ rotr(a, 22)
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1(e) = rotr(e, 6) ^ rotr(e, 11) ^ rotr(e, 25)
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Choose: each bit of `e` selects the bit from `f` (set) or `g` (clear).
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Majority of the three inputs, bitwise.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Apply 64 rounds for one block and add the result into `state`.
///
/// The working registers are reset from `state` on entry and merged back by
/// wrapping addition on exit.
pub fn compress(state: &mut [u32; STATE_WORDS], schedule: &[u32; SCHEDULE_LEN]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &w) in K.iter().zip(schedule.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, register) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(register);
    }
}
