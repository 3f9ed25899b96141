//! JSON output format for regression reports

use crate::regression::{ClassifiedResults, ComparisonResult};
use serde::Serialize;

/// Root JSON output structure
///
/// Unchanged benchmarks are reported as a count only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonReport {
    /// Threshold in percent
    pub threshold: f64,
    /// Regressed benchmarks, worst first
    pub regressions: Vec<ComparisonResult>,
    /// Improved benchmarks, biggest win first
    pub improvements: Vec<ComparisonResult>,
    pub unchanged_count: usize,
    pub has_regressions: bool,
}

impl JsonReport {
    pub fn new(classified: &ClassifiedResults, threshold: f64) -> Self {
        Self {
            threshold,
            regressions: classified
                .sorted_regressions()
                .into_iter()
                .cloned()
                .collect(),
            improvements: classified
                .sorted_improvements()
                .into_iter()
                .cloned()
                .collect(),
            unchanged_count: classified.unchanged.len(),
            has_regressions: classified.has_regressions(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
