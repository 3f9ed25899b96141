// Run configuration for one gate invocation
//
// Built once in main from CLI flags, an optional benchgate.toml and the
// defaults below, then passed by reference. Nothing reads the environment
// after that.

use crate::cli::OutputFormat;
use crate::error::GateError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_THRESHOLD: f64 = 10.0;
pub const DEFAULT_BASELINE: &str = "main";
pub const DEFAULT_CURRENT: &str = "pr";
pub const DEFAULT_TARGET_DIR: &str = "target";

/// Configuration for a baseline vs. current comparison
///
/// # Example
/// ```
/// use benchgate::regression::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.threshold, 10.0);
/// assert_eq!(config.baseline, "main");
/// assert_eq!(config.current, "pr");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Allowed change in percent before a benchmark counts as a regression
    /// (or an improvement, in the other direction)
    pub threshold: f64,

    /// Criterion baseline name holding the reference run
    pub baseline: String,

    /// Criterion baseline name holding the run under test
    pub current: String,

    /// Cargo target directory; data is read from `<target_dir>/criterion`
    pub target_dir: PathBuf,

    /// Report format written to stdout
    pub format: OutputFormat,

    /// Fail on any regression. Any regression already fails, so today this
    /// only changes the failure message.
    pub strict: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            baseline: DEFAULT_BASELINE.to_string(),
            current: DEFAULT_CURRENT.to_string(),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

impl RunConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), GateError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(GateError::InvalidConfig(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }

        if self.baseline.trim().is_empty() {
            return Err(GateError::InvalidConfig(
                "baseline label must not be empty".to_string(),
            ));
        }

        if self.current.trim().is_empty() {
            return Err(GateError::InvalidConfig(
                "current label must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply values from a config file on top of the defaults
    pub fn with_file(mut self, file: &FileConfig) -> Self {
        if let Some(threshold) = file.threshold {
            self.threshold = threshold;
        }
        if let Some(baseline) = &file.baseline {
            self.baseline = baseline.clone();
        }
        if let Some(current) = &file.current {
            self.current = current.clone();
        }
        if let Some(target_dir) = &file.target_dir {
            self.target_dir = target_dir.clone();
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(strict) = file.strict {
            self.strict = strict;
        }
        self
    }
}

/// Contents of a `benchgate.toml` file; every key is optional
///
/// ```toml
/// threshold = 5.0
/// baseline = "main"
/// current = "pr"
/// target_dir = "target"
/// format = "json"
/// strict = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub threshold: Option<f64>,
    pub baseline: Option<String>,
    pub current: Option<String>,
    pub target_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub strict: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GateError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|reason| GateError::ConfigFile {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
