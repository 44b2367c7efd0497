//! # s256-hash — SHA-256 Hash Computation
//!
//! A pure implementation of SHA-256 (FIPS 180-4) over in-memory byte
//! sequences: `&[u8] → Digest`. The hasher has no knowledge of where bytes
//! come from and keeps no state between calls.
//!
//! ## Stages
//!
//! - **Padding** (`padding`) — `0x80`, zero fill to 56 mod 64, 64-bit
//!   big-endian bit length.
//! - **Schedule expansion** (`schedule`) — 16 block words → 64 schedule
//!   words via σ0/σ1.
//! - **Compression** (`compress`) — 64 rounds over registers `a..h`.
//! - **Digest assembly** (`assemble`) — 8 state words → 32 bytes.
//!
//! ## Not Provided
//!
//! - Incremental `update`/`finalize` across calls.
//! - HMAC or other keyed modes.
//! - Hardware-accelerated paths.
//! - Constant-time guarantees. The round function does not branch on data,
//!   but nothing else is hardened against timing side channels.
//!
//! ## Crate Policy
//!
//! - All arithmetic is explicit `u32` wrapping arithmetic.
//! - Constant tables are `const` items; there is no lazy initialization.
//! - No `unsafe` code. No `.unwrap()` outside tests.

pub mod assemble;
pub mod batch;
pub mod compress;
pub mod constants;
pub mod hasher;
pub mod padding;
pub mod schedule;

pub use batch::hash_batch;
pub use hasher::{hash, hash_cancellable, hash_hex, hash_or_empty};
pub use s256_core::{Digest, HashError};
