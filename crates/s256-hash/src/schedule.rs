//! # Message Schedule Expansion
//!
//! Expands one 64-byte block into the 64-word schedule `W` consumed by
//! compression. Words 0..16 are the block read as big-endian `u32`s; words
//! 16..64 follow the recurrence
//!
//! ```text
//! W[j] = σ1(W[j-2]) + W[j-7] + σ0(W[j-15]) + W[j-16]   (mod 2^32)
//! ```
//!
//! Each σ is a self-contained function, so the XOR chain inside it can never
//! be regrouped with the surrounding additions.

use crate::constants::{BLOCK_LEN, BLOCK_WORDS, SCHEDULE_LEN};

/// σ0(x) = rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1(x) = rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Build the 64-word message schedule for one block.
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for j in BLOCK_WORDS..SCHEDULE_LEN {
        let s1 = small_sigma1(w[j - 2]);
        let s0 = small_sigma0(w[j - 15]);
        w[j] = s1
            .wrapping_add(w[j - 7])
            .wrapping_add(s0)
            .wrapping_add(w[j - 16]);
    }
    w
}
