//! Regression gate: load both runs, compare, decide, render
//!
//! [`run`] never prints. It returns the report for stdout and the
//! diagnostics for stderr so the caller owns both channels.

use crate::cli::OutputFormat;
use crate::json_output::JsonReport;
use crate::regression::{
    compare, find_criterion_dir, load_estimates, ClassifiedResults, GateVerdict, RunConfig,
};
use crate::text_output;
use anyhow::{Context, Result};

/// Outcome of one gate invocation
#[derive(Debug, Clone)]
pub struct GateRun {
    pub verdict: GateVerdict,
    /// Primary report; `None` for no-op verdicts
    pub report: Option<String>,
    /// Load warnings followed by the verdict message
    pub diagnostics: Vec<String>,
}

impl GateRun {
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }

    fn noop(verdict: GateVerdict, mut diagnostics: Vec<String>) -> Self {
        diagnostics.extend(verdict.diagnostics());
        Self {
            verdict,
            report: None,
            diagnostics,
        }
    }
}

/// Run the regression check described by `config`
///
/// Errors only on invalid configuration or a JSON serialization failure.
/// Missing data is a passing verdict, not an error.
pub fn run(config: &RunConfig) -> Result<GateRun> {
    config.validate().context("Invalid benchgate configuration")?;

    let Some(criterion_dir) = find_criterion_dir(&config.target_dir) else {
        return Ok(GateRun::noop(
            GateVerdict::NoArtifacts {
                target_dir: config.target_dir.display().to_string(),
                baseline: config.baseline.clone(),
            },
            Vec::new(),
        ));
    };
    tracing::debug!("Reading Criterion data from {}", criterion_dir.display());

    let baseline = load_estimates(&criterion_dir, &config.baseline);
    let current = load_estimates(&criterion_dir, &config.current);
    tracing::debug!(
        "Loaded {} baseline and {} current estimates",
        baseline.estimates.len(),
        current.estimates.len()
    );

    let diagnostics: Vec<String> = baseline
        .warnings
        .iter()
        .chain(&current.warnings)
        .map(ToString::to_string)
        .collect();

    if baseline.estimates.is_empty() {
        return Ok(GateRun::noop(
            GateVerdict::MissingBaseline {
                label: config.baseline.clone(),
            },
            diagnostics,
        ));
    }

    if current.estimates.is_empty() {
        return Ok(GateRun::noop(
            GateVerdict::MissingCurrent {
                label: config.current.clone(),
            },
            diagnostics,
        ));
    }

    let classified = compare(&baseline.estimates, &current.estimates, config.threshold);
    tracing::debug!("Classified {} benchmarks", classified.total());
    let report = render(&classified, config)?;
    let verdict = GateVerdict::from_results(&classified, config.threshold, config.strict);

    let mut diagnostics = diagnostics;
    diagnostics.extend(verdict.diagnostics());

    Ok(GateRun {
        verdict,
        report: Some(report),
        diagnostics,
    })
}

/// Render `classified` in the configured format
pub fn render(classified: &ClassifiedResults, config: &RunConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(text_output::render(classified, config.threshold)),
        OutputFormat::Json => JsonReport::new(classified, config.threshold)
            .to_json()
            .context("Failed to serialize JSON report"),
    }
}
