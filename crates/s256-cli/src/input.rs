//! # Input Sources
//!
//! Where the bytes to hash come from. A path of `-` means stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

/// One byte-sequence provider named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, read to end.
    Stdin,
    /// A file on disk, read whole.
    File(PathBuf),
    /// A literal string given with `--string`, hashed as its UTF-8 bytes.
    Literal(String),
}

impl InputSource {
    /// Interpret a positional path argument.
    pub fn from_path_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Display name used in output lines.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Literal(text) => format!("\"{text}\""),
        }
    }

    /// Read the full byte sequence.
    pub fn read(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Self::Literal(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

/// Build the input list for `hash`: positional paths first, then literals.
/// With neither, stdin is the only input.
pub fn collect_sources(paths: &[String], literals: &[String]) -> Vec<InputSource> {
    let mut sources: Vec<InputSource> = paths
        .iter()
        .map(|p| InputSource::from_path_arg(p))
        .chain(literals.iter().cloned().map(InputSource::Literal))
        .collect();
    if sources.is_empty() {
        sources.push(InputSource::Stdin);
    }
    sources
}
