// Criterion estimate loading
//
// Layout read here:
//
//   <criterion_dir>/<group>/<case>/<label>/estimates.json
//
// Only `mean.point_estimate` is required. Everything else Criterion writes
// (median, std_dev, slope, confidence intervals) is ignored.

use crate::regression::identity::BenchmarkId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-label statistics file Criterion writes
pub const ESTIMATES_FILE: &str = "estimates.json";

/// Subdirectory of the cargo target dir where Criterion stores its data
pub const CRITERION_DIR: &str = "criterion";

/// Mean duration in nanoseconds per benchmark identity, ordered by identity
pub type EstimateSet = BTreeMap<BenchmarkId, f64>;

/// Subset of Criterion's `estimates.json` that we need
#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Something on disk the loader had to skip
///
/// Neither case aborts the load; the rest of the tree is still read.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    /// An `estimates.json` that could not be read or failed validation
    Malformed { path: PathBuf, reason: String },
    /// A group or case directory whose entries could not be listed
    Unlistable { path: PathBuf, reason: String },
}

impl LoadWarning {
    pub fn path(&self) -> &Path {
        match self {
            LoadWarning::Malformed { path, .. } | LoadWarning::Unlistable { path, .. } => path,
        }
    }
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::Malformed { path, reason } => {
                write!(f, "Warning: Could not parse {}: {}", path.display(), reason)
            }
            LoadWarning::Unlistable { path, reason } => {
                write!(f, "Warning: Could not read {}: {}", path.display(), reason)
            }
        }
    }
}

/// Estimates for one run label plus the files that had to be skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedEstimates {
    pub estimates: EstimateSet,
    pub warnings: Vec<LoadWarning>,
}

/// Locate `<target_dir>/criterion`, if it exists
pub fn find_criterion_dir(target_dir: &Path) -> Option<PathBuf> {
    let criterion_dir = target_dir.join(CRITERION_DIR);
    criterion_dir.is_dir().then_some(criterion_dir)
}

/// Load the mean point estimate of every benchmark that has data for `label`
///
/// Missing label directories and missing estimate files are skipped
/// silently. Unreadable or malformed files are skipped with a warning. The
/// load itself never fails.
///
/// # Example
/// ```no_run
/// use benchgate::regression::load_estimates;
/// use std::path::Path;
///
/// let loaded = load_estimates(Path::new("target/criterion"), "main");
/// for warning in &loaded.warnings {
///     eprintln!("{}", warning);
/// }
/// println!("{} benchmarks", loaded.estimates.len());
/// ```
pub fn load_estimates(criterion_dir: &Path, label: &str) -> LoadedEstimates {
    let mut loaded = LoadedEstimates::default();

    for group_dir in sorted_subdirs(criterion_dir, &mut loaded.warnings) {
        let Some(group) = dir_name(&group_dir) else {
            continue;
        };

        for case_dir in sorted_subdirs(&group_dir, &mut loaded.warnings) {
            let Some(case) = dir_name(&case_dir) else {
                continue;
            };

            let estimates_file = case_dir.join(label).join(ESTIMATES_FILE);
            if !estimates_file.is_file() {
                continue;
            }

            match read_point_estimate(&estimates_file) {
                Ok(ns) => {
                    let id = BenchmarkId::new(group.clone(), case);
                    tracing::debug!("{} [{}] = {}ns", id, label, ns);
                    // First value wins on collision
                    loaded.estimates.entry(id).or_insert(ns);
                }
                Err(warning) => {
                    tracing::warn!("{}", warning);
                    loaded.warnings.push(warning);
                }
            }
        }
    }

    loaded
}

/// Read and validate a single `estimates.json`
pub fn read_point_estimate(path: &Path) -> Result<f64, LoadWarning> {
    let malformed = |reason: String| LoadWarning::Malformed {
        path: path.to_path_buf(),
        reason,
    };
    let data = fs::read(path).map_err(|e| malformed(e.to_string()))?;
    parse_point_estimate(&data).map_err(malformed)
}

/// Validate the bytes of an `estimates.json` and return the mean in nanoseconds
pub fn parse_point_estimate(data: &[u8]) -> Result<f64, String> {
    let estimates: Estimates = serde_json::from_slice(data).map_err(|e| e.to_string())?;
    let ns = estimates.mean.point_estimate;
    if !ns.is_finite() || ns < 0.0 {
        return Err(format!("mean.point_estimate must be a non-negative number, got {}", ns));
    }
    Ok(ns)
}

/// Subdirectories of `dir`, sorted by name
fn sorted_subdirs(dir: &Path, warnings: &mut Vec<LoadWarning>) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            let warning = LoadWarning::Unlistable {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
