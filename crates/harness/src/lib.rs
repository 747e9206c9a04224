//! Benchmark harness for ndarray operations.
//!
//! This crate times a catalog of array scenarios modeled on common NumPy
//! operations and writes the results in the harness JSON format consumed by
//! `arraybench-compare`.
//!
//! # Quick Start
//!
//! ```no_run
//! use arraybench_harness::{catalog, run_scenarios, CatalogConfig, Timing};
//!
//! let scenarios = catalog::build(&CatalogConfig::new(100_000));
//! let timing = Timing::new(3, 10).unwrap();
//! let results = run_scenarios(&scenarios, &timing, 42, |_| {}).unwrap();
//!
//! for result in &results {
//!     println!("{}: {:.3} ms", result.operation, result.mean_ms);
//! }
//! ```
//!
//! # Modules
//!
//! - [`timing`] - warmup and sampling around a single workload
//! - [`catalog`] - the scenario families
//! - [`runner`] - sequential execution with reference speedups
//! - [`result`] - the `BenchmarkResult` record
//! - [`io`] - reading and writing result files
//! - [`markdown`] - markdown summary generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod element;
pub mod io;
pub mod markdown;
pub mod result;
pub mod runner;
pub mod timing;

pub use catalog::{CatalogConfig, Scenario, Suite};
pub use result::BenchmarkResult;
pub use runner::{run_scenario, run_scenarios};
pub use timing::{measure, throughput, Summary, Timing};

use arraybench_core::Result;
use std::path::Path;

/// Build the configured catalog, run it and write the results JSON and
/// markdown summary.
pub fn run_and_write_all(
    config: &CatalogConfig,
    timing: &Timing,
    seed: u64,
    json_path: impl AsRef<Path>,
) -> Result<Vec<BenchmarkResult>> {
    let scenarios = catalog::build(config);
    let results = run_scenarios(&scenarios, timing, seed, |_| {})?;
    io::write_all_outputs(&results, json_path)?;
    Ok(results)
}
