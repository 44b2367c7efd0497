//! # CLI Configuration
//!
//! Resolves output and logging settings from flags and environment:
//!
//! - `S256_OUTPUT_FORMAT` — default digest format (`hex`, `tagged`, `json`)
//!   when `--format` is not given.
//! - `S256_LOG_FORMAT` — `json` selects structured JSON logs; anything else
//!   (or absent) selects human-readable text.
//!
//! Log filtering itself follows `RUST_LOG`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Environment variable naming the default output format.
pub const OUTPUT_FORMAT_ENV: &str = "S256_OUTPUT_FORMAT";

/// Environment variable naming the log format.
pub const LOG_FORMAT_ENV: &str = "S256_LOG_FORMAT";

/// How a digest line is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<hex>  <name>`, the `sha256sum` layout.
    #[default]
    Hex,
    /// `SHA256 (<name>) = <hex>`, the BSD tagged layout.
    Tagged,
    /// One JSON object per line.
    Json,
}

/// How log records are written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Format used when a subcommand does not receive `--format`.
    pub default_format: OutputFormat,
    /// Log record format.
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Unrecognized values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_format = lookup(OUTPUT_FORMAT_ENV)
            .and_then(|v| OutputFormat::from_str(v.trim(), true).ok())
            .unwrap_or_default();
        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            default_format,
            log_format,
        }
    }

    /// The format to use given an optional `--format` flag.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.default_format)
    }
}
