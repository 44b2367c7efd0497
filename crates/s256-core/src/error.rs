//! # Error Types
//!
//! Structured errors for hashing and digest parsing. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The hash function is total over every representable byte sequence.
//!   Allocation failure is the only environmental failure and is fatal.
//! - Cancellation is reported with the block position reached, so callers
//!   can tell how far the computation got.

use thiserror::Error;

/// Error raised by a hash computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The padded message buffer could not be reserved. Also raised when the
    /// padded length itself is not representable as a `usize`.
    #[error("allocation failure: could not reserve {requested} bytes for the padded message")]
    AllocationFailure {
        /// Number of bytes the padding stage attempted to reserve.
        requested: usize,
    },

    /// The caller requested cancellation; observed at a block boundary.
    #[error("hash computation cancelled after {blocks_done} of {blocks_total} blocks")]
    Cancelled {
        /// Blocks fully compressed before cancellation was observed.
        blocks_done: usize,
        /// Blocks in the padded message.
        blocks_total: usize,
    },
}

/// Error parsing a hex-encoded digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// The input was not exactly 64 hex characters after trimming.
    #[error("expected 64 hex chars, got {0}")]
    InvalidLength(usize),

    /// A non-hex character was found.
    #[error("invalid hex character at position {position}")]
    InvalidHex {
        /// Zero-based character offset within the trimmed input.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failure_display() {
        let err = HashError::AllocationFailure { requested: 128 };
        assert_eq!(
            err.to_string(),
            "allocation failure: could not reserve 128 bytes for the padded message"
        );
    }

    #[test]
    fn test_cancelled_display() {
        let err = HashError::Cancelled {
            blocks_done: 3,
            blocks_total: 10,
        };
        assert_eq!(
            err.to_string(),
            "hash computation cancelled after 3 of 10 blocks"
        );
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            DigestParseError::InvalidLength(12).to_string(),
            "expected 64 hex chars, got 12"
        );
        assert_eq!(
            DigestParseError::InvalidHex { position: 5 }.to_string(),
            "invalid hex character at position 5"
        );
    }
}
