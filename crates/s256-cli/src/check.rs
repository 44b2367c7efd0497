//! # Check Subcommand
//!
//! Hashes one input and compares it against an expected digest.

use std::io::Write;

use anyhow::Context;
use clap::Args;

use s256_core::Digest;

use crate::input::InputSource;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Expected digest, 64 hex characters.
    #[arg(long)]
    pub expected: String,

    /// File to check. Omitted or `-` reads stdin.
    pub path: Option<String>,
}

/// Compare the digest of `source` with `expected`, writing `OK` or `FAILED`.
///
/// Returns whether the digests matched.
pub fn check_source<W: Write>(
    source: &InputSource,
    expected: &str,
    out: &mut W,
) -> anyhow::Result<bool> {
    let expected = Digest::from_hex(expected).context("invalid expected digest")?;
    let bytes = source.read()?;
    let actual = s256_hash::hash(&bytes).context("hashing failed")?;
    let name = source.name();

    if actual == expected {
        writeln!(out, "{name}: OK")?;
        Ok(true)
    } else {
        tracing::warn!(%name, %expected, %actual, "digest mismatch");
        writeln!(out, "{name}: FAILED")?;
        Ok(false)
    }
}

/// Handle `s256 check`.
pub fn run<W: Write>(args: &CheckArgs, out: &mut W) -> anyhow::Result<bool> {
    let source = args
        .path
        .as_deref()
        .map_or(InputSource::Stdin, InputSource::from_path_arg);
    check_source(&source, &args.expected, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_digest() {
        let mut out = Vec::new();
        let ok = check_source(
            &InputSource::Literal("abc".into()),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD",
            &mut out,
        )
        .unwrap();
        assert!(ok);
        assert_eq!(String::from_utf8(out).unwrap(), "\"abc\": OK\n");
    }

    #[test]
    fn test_mismatched_digest() {
        let mut out = Vec::new();
        let ok = check_source(
            &InputSource::Literal("abd".into()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            &mut out,
        )
        .unwrap();
        assert!(!ok);
        assert_eq!(String::from_utf8(out).unwrap(), "\"abd\": FAILED\n");
    }

    #[test]
    fn test_malformed_expected_is_an_error() {
        let mut out = Vec::new();
        let err = check_source(&InputSource::Literal("abc".into()), "xyz", &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid expected digest"));
        assert!(out.is_empty());
    }
}
