// Baseline vs. current classification
//
// diff_pct = (current - baseline) / baseline * 100
//   positive: current is slower
//   negative: current is faster
//
// The threshold is applied symmetrically with strict inequalities, so a
// change of exactly +threshold or -threshold counts as unchanged.

use crate::regression::loader::EstimateSet;
use serde::Serialize;
use std::cmp::Ordering;

/// One benchmark present in both runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// `group/case`
    pub name: String,
    pub baseline_ns: f64,
    pub current_ns: f64,
    /// Signed percentage change relative to the baseline
    pub diff_pct: f64,
}

impl ComparisonResult {
    /// Returns `None` when `baseline_ns` is zero or the change overflows
    ///
    /// A subnormal baseline (e.g. `5e-324`) is non-zero but still divides to
    /// infinity, which has no meaningful percentage.
    pub fn new(name: impl Into<String>, baseline_ns: f64, current_ns: f64) -> Option<Self> {
        if baseline_ns == 0.0 {
            return None;
        }
        let diff_pct = (current_ns - baseline_ns) / baseline_ns * 100.0;
        if !diff_pct.is_finite() {
            return None;
        }
        Some(Self {
            name: name.into(),
            baseline_ns,
            current_ns,
            diff_pct,
        })
    }
}

/// Three disjoint classifications of the compared benchmarks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedResults {
    /// diff_pct > threshold
    pub regressions: Vec<ComparisonResult>,
    /// diff_pct < -threshold
    pub improvements: Vec<ComparisonResult>,
    pub unchanged: Vec<ComparisonResult>,
}

impl ClassifiedResults {
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty()
    }

    pub fn total(&self) -> usize {
        self.regressions.len() + self.improvements.len() + self.unchanged.len()
    }

    /// Regressions ordered worst first
    pub fn sorted_regressions(&self) -> Vec<&ComparisonResult> {
        let mut sorted: Vec<&ComparisonResult> = self.regressions.iter().collect();
        sorted.sort_by(|a, b| by_diff_pct(b, a));
        sorted
    }

    /// Improvements ordered biggest win first
    pub fn sorted_improvements(&self) -> Vec<&ComparisonResult> {
        let mut sorted: Vec<&ComparisonResult> = self.improvements.iter().collect();
        sorted.sort_by(|a, b| by_diff_pct(a, b));
        sorted
    }
}

fn by_diff_pct(a: &ComparisonResult, b: &ComparisonResult) -> Ordering {
    a.diff_pct.total_cmp(&b.diff_pct)
}

/// Classify every benchmark present in both `baseline` and `current`
///
/// Benchmarks present in only one run are left out of all three sets, as
/// are benchmarks whose change cannot be expressed as a finite percentage
/// (zero or subnormal baseline).
///
/// # Example
/// ```
/// use benchgate::regression::{compare, BenchmarkId, EstimateSet};
///
/// let mut baseline = EstimateSet::new();
/// baseline.insert(BenchmarkId::new("g", "a"), 100.0);
/// let mut current = EstimateSet::new();
/// current.insert(BenchmarkId::new("g", "a"), 111.0);
///
/// let classified = compare(&baseline, &current, 10.0);
/// assert_eq!(classified.regressions.len(), 1);
/// ```
pub fn compare(baseline: &EstimateSet, current: &EstimateSet, threshold: f64) -> ClassifiedResults {
    let mut classified = ClassifiedResults::default();

    for (id, &current_ns) in current {
        let Some(&baseline_ns) = baseline.get(id) else {
            continue;
        };
        let Some(result) = ComparisonResult::new(id.to_string(), baseline_ns, current_ns) else {
            tracing::debug!(
                "{}: no finite change from baseline {}ns, skipped",
                id,
                baseline_ns
            );
            continue;
        };

        if result.diff_pct > threshold {
            classified.regressions.push(result);
        } else if result.diff_pct < -threshold {
            classified.improvements.push(result);
        } else {
            classified.unchanged.push(result);
        }
    }

    classified
}
