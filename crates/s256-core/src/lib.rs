//! # s256-core — Foundational Types for the s256 Toolkit
//!
//! This crate is the leaf of the workspace. It defines the value produced by
//! every hash computation and the errors a computation can raise. The hashing
//! algorithm itself lives in `s256-hash`; this crate knows nothing about how
//! a digest is computed.
//!
//! ## Key Design Principles
//!
//! 1. **`Digest` newtype.** A digest is exactly 32 bytes, enforced by the
//!    `[u8; 32]` inner type. No `Vec<u8>` digests anywhere in the workspace.
//!
//! 2. **One hex form.** 64 lowercase hex characters, no separators. `Display`,
//!    `to_hex()` and serde all produce the same string.
//!
//! 3. **Minimal error taxonomy.** Hashing is total over byte sequences; the
//!    only failures are allocation failure and explicit cancellation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `s256-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use digest::{Digest, DIGEST_HEX_LEN, DIGEST_LEN};
pub use error::{DigestParseError, HashError};
