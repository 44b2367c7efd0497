//! # Hash Subcommand
//!
//! Reads inputs in groups of one per available core, hashes each group as a
//! concurrent batch, and prints one line per input in the selected format.
//! At most one group of inputs is held in memory at a time.

use std::io::Write;
use std::num::NonZeroUsize;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use s256_core::Digest;

use crate::config::{CliConfig, OutputFormat};
use crate::input::{collect_sources, InputSource};

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Files to hash. `-` reads stdin. With no files and no `--string`,
    /// stdin is hashed.
    pub paths: Vec<String>,

    /// Hash a literal string (UTF-8). May be repeated.
    #[arg(long = "string", short = 's', value_name = "TEXT")]
    pub strings: Vec<String>,

    /// Output format. Defaults to `S256_OUTPUT_FORMAT`, then `hex`.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// One line of JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DigestRecord<'a> {
    /// Input display name.
    pub name: &'a str,
    /// Hex digest.
    pub digest: Digest,
    /// Input length in bytes.
    pub len: usize,
}

/// Render one output line (without trailing newline).
pub fn render(
    format: OutputFormat,
    name: &str,
    digest: &Digest,
    len: usize,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Hex => format!("{digest}  {name}"),
        OutputFormat::Tagged => format!("SHA256 ({name}) = {digest}"),
        OutputFormat::Json => serde_json::to_string(&DigestRecord {
            name,
            digest: *digest,
            len,
        })?,
    })
}

/// Hash the given sources and write one line each to `out`, reading one
/// group per available core at a time.
pub fn hash_sources<W: Write>(
    sources: &[InputSource],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let group_len = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    hash_sources_grouped(sources, format, group_len, out)
}

/// Hash `sources` in groups of `group_len`, writing each group's lines
/// before the next group is read.
///
/// A read failure stops the run; lines for earlier groups have already been
/// written, lines for the failing group have not.
pub fn hash_sources_grouped<W: Write>(
    sources: &[InputSource],
    format: OutputFormat,
    group_len: usize,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut written = 0usize;
    for group in sources.chunks(group_len.max(1)) {
        let inputs = group
            .iter()
            .map(InputSource::read)
            .collect::<anyhow::Result<Vec<_>>>()?;
        let digests = s256_hash::hash_batch(&inputs).context("hashing failed")?;

        for ((source, input), digest) in group.iter().zip(&inputs).zip(&digests) {
            let line = render(format, &source.name(), digest, input.len())?;
            writeln!(out, "{line}")?;
        }
        written += digests.len();
    }
    tracing::debug!(count = written, "digests written");
    Ok(())
}

/// Handle `s256 hash`.
pub fn run<W: Write>(args: &HashArgs, config: &CliConfig, out: &mut W) -> anyhow::Result<()> {
    let sources = collect_sources(&args.paths, &args.strings);
    hash_sources(&sources, config.output_format(args.format), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn abc() -> Digest {
        Digest::from_hex(ABC_HEX).unwrap()
    }

    #[test]
    fn test_render_hex() {
        let line = render(OutputFormat::Hex, "file.txt", &abc(), 3).unwrap();
        assert_eq!(line, format!("{ABC_HEX}  file.txt"));
    }

    #[test]
    fn test_render_tagged() {
        let line = render(OutputFormat::Tagged, "file.txt", &abc(), 3).unwrap();
        assert_eq!(line, format!("SHA256 (file.txt) = {ABC_HEX}"));
    }

    #[test]
    fn test_render_json() {
        let line = render(OutputFormat::Json, "\"abc\"", &abc(), 3).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["name"], "\"abc\"");
        assert_eq!(value["digest"], ABC_HEX);
        assert_eq!(value["len"], 3);
    }

    #[test]
    fn test_grouped_output_keeps_input_order() {
        let sources: Vec<InputSource> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| InputSource::Literal(s.to_string()))
            .collect();
        let mut grouped = Vec::new();
        hash_sources_grouped(&sources, OutputFormat::Hex, 2, &mut grouped).unwrap();
        let mut single = Vec::new();
        hash_sources_grouped(&sources, OutputFormat::Hex, sources.len(), &mut single).unwrap();
        assert_eq!(grouped, single);
        assert_eq!(String::from_utf8(grouped).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_later_group_is_not_read_before_earlier_output() {
        let sources = vec![
            InputSource::Literal("abc".into()),
            InputSource::File("/nonexistent/s256/later.bin".into()),
        ];
        let mut out = Vec::new();
        let err = hash_sources_grouped(&sources, OutputFormat::Hex, 1, &mut out).unwrap_err();
        assert!(err.to_string().contains("later.bin"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{ABC_HEX}  \"abc\"\n")
        );
    }

    #[test]
    fn test_zero_group_len_is_treated_as_one() {
        let sources = vec![InputSource::Literal("abc".into())];
        let mut out = Vec::new();
        hash_sources_grouped(&sources, OutputFormat::Hex, 0, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_run_with_literals() {
        let args = HashArgs {
            paths: vec![],
            strings: vec!["abc".into(), "".into()],
            format: None,
        };
        let mut out = Vec::new();
        run(&args, &CliConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("{ABC_HEX}  \"abc\""),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855  \"\"".to_string(),
            ]
        );
    }
}
