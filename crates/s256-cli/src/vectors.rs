//! # Vectors Subcommand
//!
//! Runs the built-in known-answer vectors against this build of the hasher.

use std::io::Write;

use anyhow::Context;

/// A known-answer vector: label, input, expected hex digest.
pub struct KnownVector {
    pub label: &'static str,
    pub input: &'static [u8],
    pub expected: &'static str,
}

/// Standard SHA-256 vectors covering one- and two-block messages.
pub const KNOWN_VECTORS: &[KnownVector] = &[
    KnownVector {
        label: "empty",
        input: b"",
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownVector {
        label: "abc",
        input: b"abc",
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownVector {
        label: "448-bit",
        input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownVector {
        label: "pangram",
        input: b"The quick brown fox jumps over the lazy dog",
        expected: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
];

/// Handle `s256 vectors`. Returns whether every vector passed.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<bool> {
    run_vectors(KNOWN_VECTORS, out)
}

/// Check each vector in `table`, writing one `ok`/`FAILED` line per entry.
pub fn run_vectors<W: Write>(table: &[KnownVector], out: &mut W) -> anyhow::Result<bool> {
    let mut all_passed = true;
    for vector in table {
        let actual = s256_hash::hash_hex(vector.input)
            .with_context(|| format!("hashing vector {}", vector.label))?;
        let passed = actual == vector.expected;
        if !passed {
            tracing::error!(label = vector.label, %actual, expected = vector.expected, "vector failed");
        }
        all_passed &= passed;
        writeln!(
            out,
            "{:<8} {}",
            vector.label,
            if passed { "ok" } else { "FAILED" }
        )?;
    }
    Ok(all_passed)
}
