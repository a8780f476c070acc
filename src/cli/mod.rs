//! Command line layer: argument parsing, orchestration and exit codes.
//!
//! This is the only place that turns validation and processing outcomes into
//! user-facing messages and process exit statuses.

pub mod args;
pub mod runner;

pub use args::{Cli, Command, SeparateArgs};
pub use runner::{outcome_for, run, separate};

use std::process::ExitCode;

/// Final status of an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stems were produced
    Success,
    /// Validation or unexpected failure
    Failure,
    /// Interrupted by the user
    Cancelled,
}

impl Outcome {
    /// Process exit code
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
            Outcome::Cancelled => 130,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}
