//! # Digest — The 256-bit Hash Output
//!
//! Defines `Digest`, the immutable 32-byte value produced once per hash
//! computation. A digest holds its own copy of the bytes and has no
//! relationship to the input buffer it was computed from.
//!
//! ## Hex Rendering
//!
//! The display form is 64 lowercase hex characters with no separators or
//! algorithm prefix, matching the layout of `sha256sum` output. Parsing is
//! case-insensitive and tolerates surrounding whitespace, so a digest pasted
//! from a checksum file round-trips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DigestParseError;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a hex-rendered SHA-256 digest in characters.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A SHA-256 digest.
///
/// Serializes as its lowercase hex string so that JSON output is directly
/// comparable with other tooling.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap 32 raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest, returning the raw bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_HEX_LEN);
        for byte in self.0 {
            out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
            out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
        }
        out
    }

    /// Parse a 64-character hex string.
    ///
    /// # Errors
    ///
    /// Returns `DigestParseError::InvalidLength` if the trimmed input is not
    /// 64 bytes long, and `DigestParseError::InvalidHex` at the first
    /// character outside `[0-9a-fA-F]`.
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        let hex = hex.trim().as_bytes();
        if hex.len() != DIGEST_HEX_LEN {
            return Err(DigestParseError::InvalidLength(hex.len()));
        }
        let mut out = [0u8; DIGEST_LEN];
        for (i, pair) in hex.chunks_exact(2).enumerate() {
            let hi = nibble(pair[0]).ok_or(DigestParseError::InvalidHex { position: 2 * i })?;
            let lo = nibble(pair[1]).ok_or(DigestParseError::InvalidHex {
                position: 2 * i + 1,
            })?;
            out[i] = (hi << 4) | lo;
        }
        Ok(Self(out))
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for Digest {
    type Error = DigestParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
