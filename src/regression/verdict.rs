// Gate verdict and exit-status policy
//
// Every no-data condition passes (exit 0) so a first CI run without a saved
// baseline never blocks a merge. Only a non-empty regression set fails.

use crate::regression::compare::ClassifiedResults;

/// Exit code for a passing (or no-op) run
pub const EXIT_PASS: i32 = 0;

/// Exit code when at least one benchmark regressed
pub const EXIT_REGRESSION: i32 = 1;

/// Exit code when the run aborts before a verdict (bad configuration)
///
/// Matches the code clap uses for usage errors.
pub const EXIT_ERROR: i32 = 2;

/// Final verdict for one baseline/current comparison
#[derive(Debug, Clone, PartialEq)]
pub enum GateVerdict {
    /// No `<target_dir>/criterion` directory
    NoArtifacts { target_dir: String, baseline: String },

    /// Nothing loaded for the baseline label
    MissingBaseline { label: String },

    /// Nothing loaded for the current label
    MissingCurrent { label: String },

    /// Compared, nothing exceeded the threshold
    Pass,

    /// Compared, at least one regression
    Fail {
        regressions: usize,
        threshold: f64,
        strict: bool,
    },
}

impl GateVerdict {
    /// Verdict for a completed comparison
    ///
    /// `strict` only changes the failure message: any regression fails
    /// whether or not it is set.
    pub fn from_results(classified: &ClassifiedResults, threshold: f64, strict: bool) -> Self {
        if classified.has_regressions() {
            GateVerdict::Fail {
                regressions: classified.regressions.len(),
                threshold,
                strict,
            }
        } else {
            GateVerdict::Pass
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            GateVerdict::Fail { .. } => EXIT_REGRESSION,
            _ => EXIT_PASS,
        }
    }

    /// Lines for the diagnostic (stderr) channel
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            GateVerdict::NoArtifacts {
                target_dir,
                baseline,
            } => vec![
                format!("Warning: No criterion benchmark data found in {}.", target_dir),
                format!(
                    "Run benchmarks first: cargo bench --bench <name> -- --save-baseline {}",
                    baseline
                ),
            ],
            GateVerdict::MissingBaseline { label } => {
                vec![format!("Warning: No baseline '{}' benchmark data found.", label)]
            }
            GateVerdict::MissingCurrent { label } => {
                vec![format!("Warning: No current '{}' benchmark data found.", label)]
            }
            GateVerdict::Pass => vec!["✅ PASS: No significant regressions detected".to_string()],
            GateVerdict::Fail {
                regressions,
                threshold,
                strict,
            } => {
                if *strict {
                    vec!["❌ FAIL: Regressions detected (--strict mode)".to_string()]
                } else {
                    vec![format!(
                        "❌ FAIL: {} benchmark(s) regressed >{}%",
                        regressions, threshold
                    )]
                }
            }
        }
    }
}
