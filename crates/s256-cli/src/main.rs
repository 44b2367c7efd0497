//! # s256 CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use s256_cli::config::{CliConfig, LogFormat};
use s256_cli::outcome::Outcome;

/// s256 — SHA-256 digests of files, stdin, and strings.
#[derive(Parser, Debug)]
#[command(name = "s256", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print SHA-256 digests.
    Hash(s256_cli::hash::HashArgs),
    /// Verify an input against an expected digest.
    Check(s256_cli::check::CheckArgs),
    /// Run the built-in known-answer vectors.
    Vectors,
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::from_env();
    init_tracing(config.log_format);

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let passed = match cli.command {
        Commands::Hash(args) => {
            s256_cli::hash::run(&args, &config, &mut stdout)?;
            true
        }
        Commands::Check(args) => s256_cli::check::run(&args, &mut stdout)?,
        Commands::Vectors => s256_cli::vectors::run(&mut stdout)?,
    };

    Ok(Outcome::from(passed).into())
}
