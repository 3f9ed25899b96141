//! CLI argument parsing for benchgate

use crate::regression::{FileConfig, RunConfig};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Output format for the comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "benchgate")]
#[command(version)]
#[command(about = "Check Criterion benchmark results for performance regressions", long_about = None)]
pub struct Cli {
    /// Maximum allowed regression percentage (default: 10)
    #[arg(long = "threshold", value_name = "PCT")]
    pub threshold: Option<f64>,

    /// Baseline benchmark name (default: main)
    #[arg(long = "baseline", value_name = "NAME")]
    pub baseline: Option<String>,

    /// Current benchmark name (default: pr)
    #[arg(long = "current", value_name = "NAME")]
    pub current: Option<String>,

    /// Cargo target directory (default: target)
    #[arg(long = "target-dir", value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Output results as JSON (same as --format json)
    #[arg(long = "json", conflicts_with = "format")]
    pub json: bool,

    /// Exit with error on any regression (regardless of threshold)
    #[arg(long = "strict")]
    pub strict: bool,

    /// Read defaults from a TOML file; flags given on the command line win
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Merge flags over `file` over the built-in defaults
    pub fn to_run_config(&self, file: &FileConfig) -> RunConfig {
        let mut config = RunConfig::default().with_file(file);

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(baseline) = &self.baseline {
            config.baseline = baseline.clone();
        }
        if let Some(current) = &self.current {
            config.current = current.clone();
        }
        if let Some(target_dir) = &self.target_dir {
            config.target_dir = target_dir.clone();
        }
        if self.json {
            config.format = OutputFormat::Json;
        } else if let Some(format) = self.format {
            config.format = format;
        }
        if self.strict {
            config.strict = true;
        }

        config
    }
}
