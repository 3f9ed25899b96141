//! benchgate - CI gate for Criterion benchmark regressions
//!
//! Compares the mean point estimates Criterion saved under two baseline
//! names (by default `main` and `pr`), classifies every benchmark as a
//! regression, an improvement or unchanged, and turns the result into a
//! text or JSON report plus a process exit code.

pub mod cli;
pub mod error;
pub mod gate;
pub mod json_output;
pub mod regression;
pub mod text_output;
