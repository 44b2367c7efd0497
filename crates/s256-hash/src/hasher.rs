//! # Hasher — Pure SHA-256 Entry Points
//!
//! Composes the stages in order for one input:
//!
//! ```text
//! Init ──pad──▶ Padded ──▶ BlockLoop(0) ──compress──▶ … ──▶ BlockLoop(n-1) ──assemble──▶ Done
//! ```
//!
//! Each call owns its padded buffer and its copy of `H0`; the only shared
//! data are the `const` tables. The sole abnormal exits are allocation
//! failure while padding and, for [`hash_cancellable`], a cancellation
//! observed between blocks.

use std::sync::atomic::{AtomicBool, Ordering};

use s256_core::{Digest, HashError};

use crate::assemble::assemble;
use crate::compress::compress;
use crate::constants::{BLOCK_LEN, H0};
use crate::padding::{blocks, pad};
use crate::schedule::expand;

/// Compute the SHA-256 digest of `bytes`.
///
/// # Errors
///
/// Returns `HashError::AllocationFailure` if the padded message buffer
/// cannot be allocated.
pub fn hash(bytes: &[u8]) -> Result<Digest, HashError> {
    run(bytes, None)
}

/// Compute the SHA-256 digest of `bytes` as 64 lowercase hex characters.
pub fn hash_hex(bytes: &[u8]) -> Result<String, HashError> {
    hash(bytes).map(|digest| digest.to_hex())
}

/// Compute the SHA-256 digest of an optional input.
///
/// An absent input is hashed as the empty byte sequence.
pub fn hash_or_empty(bytes: Option<&[u8]>) -> Result<Digest, HashError> {
    hash(bytes.unwrap_or_default())
}

/// Compute the SHA-256 digest of `bytes`, stopping early if `cancel` is set.
///
/// The flag is read once before each block is compressed, never inside the
/// round loop.
///
/// # Errors
///
/// Returns `HashError::Cancelled` with the number of blocks already
/// compressed, or `HashError::AllocationFailure` as for [`hash`].
pub fn hash_cancellable(bytes: &[u8], cancel: &AtomicBool) -> Result<Digest, HashError> {
    run(bytes, Some(cancel))
}

fn run(bytes: &[u8], cancel: Option<&AtomicBool>) -> Result<Digest, HashError> {
    let message = pad(bytes)?;
    let blocks_total = message.len() / BLOCK_LEN;
    tracing::debug!(input_len = bytes.len(), blocks = blocks_total, "hashing message");

    let mut state = H0;
    for (blocks_done, block) in blocks(&message).enumerate() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            tracing::debug!(blocks_done, blocks_total, "hash cancelled");
            return Err(HashError::Cancelled {
                blocks_done,
                blocks_total,
            });
        }
        compress(&mut state, &expand(block));
    }

    Ok(assemble(&state))
}
