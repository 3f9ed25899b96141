//! Error types for benchgate
//!
//! Missing artifacts, missing run data and detected regressions are not
//! errors here: they are verdicts (see [`crate::regression::GateVerdict`])
//! because they decide the exit code instead of aborting the run. Skipped
//! measurement files are [`crate::regression::LoadWarning`]s.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run before any verdict
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config file {path}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },
}
