//! # Run Outcome
//!
//! Maps a subcommand's pass/fail result to the process exit status. A failed
//! `check` or `vectors` run exits non-zero even though no error was raised.

use std::process::ExitCode;

/// Whether a subcommand's checks held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every comparison matched, or there was nothing to compare.
    Passed,
    /// At least one digest did not match its expected value.
    Failed,
}

impl Outcome {
    /// Process exit status: 0 when passed, 1 when failed.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}
