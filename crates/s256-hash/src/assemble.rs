//! # Digest Assembly
//!
//! Serializes the final eight state words into the 32-byte digest, each
//! word most-significant byte first, in state order `h0..h7`.

use s256_core::{Digest, DIGEST_LEN};

use crate::constants::STATE_WORDS;

/// Build the digest from the final running state.
pub fn assemble(state: &[u32; STATE_WORDS]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    Digest::from_bytes(out)
}
