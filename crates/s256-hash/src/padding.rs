//! # Message Padding
//!
//! Extends a message to a whole number of 64-byte blocks:
//!
//! ```text
//! message || 0x80 || 0x00 * k || bit_len (u64, big-endian)
//! ```
//!
//! where `k` is the smallest count that leaves the buffer length congruent
//! to 56 mod 64 before the length trailer. The bit length wraps modulo 2^64
//! for messages longer than 2^61 bytes.
//!
//! The padded buffer is reserved up front with `try_reserve_exact`, so an
//! oversized input surfaces as `HashError::AllocationFailure` instead of an
//! abort.

use s256_core::HashError;

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Length of the padded message for an input of `len` bytes.
///
/// Returns `None` when the padded length does not fit in a `usize`.
pub fn padded_len(len: usize) -> Option<usize> {
    let min = len.checked_add(1 + LENGTH_FIELD_LEN)?;
    match min % BLOCK_LEN {
        0 => Some(min),
        rem => min.checked_add(BLOCK_LEN - rem),
    }
}

/// Copy `input` into a fresh buffer and apply SHA-256 padding.
///
/// The returned buffer is owned by one hash computation; its length is a
/// positive multiple of [`BLOCK_LEN`].
///
/// # Errors
///
/// Returns `HashError::AllocationFailure` if the padded length overflows
/// `usize` or the buffer cannot be reserved.
pub fn pad(input: &[u8]) -> Result<Vec<u8>, HashError> {
    let total = padded_len(input.len()).ok_or(HashError::AllocationFailure {
        requested: usize::MAX,
    })?;

    let mut message = Vec::new();
    message
        .try_reserve_exact(total)
        .map_err(|_| HashError::AllocationFailure { requested: total })?;

    message.extend_from_slice(input);
    message.push(0x80);
    message.resize(total - LENGTH_FIELD_LEN, 0x00);
    let bit_len = (input.len() as u64).wrapping_mul(8);
    message.extend_from_slice(&bit_len.to_be_bytes());
    Ok(message)
}

/// Iterate a padded message as fixed-size blocks.
///
/// Trailing bytes that do not fill a whole block are skipped; a buffer
/// produced by [`pad`] never has any.
pub fn blocks(message: &[u8]) -> impl Iterator<Item = &[u8; BLOCK_LEN]> {
    // `chunks_exact` yields only slices of exactly BLOCK_LEN bytes, so the
    // array conversion cannot fail and `filter_map` never drops a chunk.
    message
        .chunks_exact(BLOCK_LEN)
        .filter_map(|chunk| <&[u8; BLOCK_LEN]>::try_from(chunk).ok())
}
