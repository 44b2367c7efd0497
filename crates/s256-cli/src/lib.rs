//! # s256-cli — Command-Line Interface
//!
//! A thin byte-sequence provider around `s256-hash`: it reads files, stdin,
//! or literal strings, hands the bytes to the hasher, and prints digests.
//! Nothing here knows how a digest is computed.
//!
//! ## Subcommands
//!
//! - `hash` — print digests for files, stdin, and `--string` literals
//! - `check` — compare one input against an expected digest
//! - `vectors` — run the built-in standard test vectors
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from handler logic.
//! - Handlers write to any `io::Write`, so they are testable without a TTY.
//! - Digests go to stdout; logs go to stderr.
//! - A failed comparison exits with status 1 via [`outcome::Outcome`].

pub mod check;
pub mod config;
pub mod hash;
pub mod input;
pub mod outcome;
pub mod vectors;
