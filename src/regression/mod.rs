// Benchmark regression detection against Criterion baselines
//
// Pipeline:
// - loader:   target/criterion/<group>/<case>/<label>/estimates.json -> EstimateSet
// - compare:  baseline EstimateSet x current EstimateSet -> ClassifiedResults
// - verdict:  ClassifiedResults (or a no-data condition) -> GateVerdict + exit code
//
// Rendering lives in text_output / json_output; gate.rs wires it together.

mod compare;
mod config;
mod identity;
mod loader;
mod verdict;

pub use compare::{compare, ClassifiedResults, ComparisonResult};
pub use config::{
    FileConfig, RunConfig, DEFAULT_BASELINE, DEFAULT_CURRENT, DEFAULT_TARGET_DIR,
    DEFAULT_THRESHOLD,
};
pub use identity::BenchmarkId;
pub use loader::{
    find_criterion_dir, load_estimates, parse_point_estimate, read_point_estimate, EstimateSet,
    LoadWarning, LoadedEstimates, CRITERION_DIR, ESTIMATES_FILE,
};
pub use verdict::{GateVerdict, EXIT_ERROR, EXIT_PASS, EXIT_REGRESSION};
