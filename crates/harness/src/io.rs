//! I/O operations for benchmark results.
//!
//! This module reads and writes harness results. Nothing here runs inside
//! a timed region.

use crate::markdown;
use crate::result::BenchmarkResult;
use arraybench_core::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default results file name inside the output directory.
pub const RESULTS_FILE: &str = "benchmark-results.json";

/// Summary file name inside the output directory.
pub const SUMMARY_FILE: &str = "summary.md";

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write benchmark results to a JSON file, creating parent directories.
pub fn write_results_json(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    info!(path = %path.display(), count = results.len(), "wrote results");
    Ok(())
}

/// Read results from a JSON file.
pub fn read_results_json(path: impl AsRef<Path>) -> Result<Vec<BenchmarkResult>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the markdown summary.
pub fn write_summary(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, markdown::generate_summary(results))?;
    Ok(())
}

/// Write the results JSON to `json_path` and the summary next to it.
///
/// Returns the summary path.
pub fn write_all_outputs(results: &[BenchmarkResult], json_path: impl AsRef<Path>) -> Result<PathBuf> {
    let json_path = json_path.as_ref();
    write_results_json(results, json_path)?;

    let summary_path = json_path.with_file_name(SUMMARY_FILE);
    write_summary(results, &summary_path)?;
    Ok(summary_path)
}
