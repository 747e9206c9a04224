// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Where the two result sets come from.

use std::fs;
use std::path::PathBuf;

use arraybench_harness::BenchmarkResult;
use tracing::{info, warn};

use crate::artifact::{load_artifacts, CandidateResult};

/// Supplies the baseline (harness) results.
#[cfg_attr(test, mockall::automock)]
pub trait BaselineSource {
    /// Load baseline results. Failures are logged and yield an empty set.
    fn load_baseline(&self) -> Vec<BenchmarkResult>;
}

/// Supplies the candidate (external) results.
#[cfg_attr(test, mockall::automock)]
pub trait CandidateSource {
    /// Load parsed candidate results, already filtered by size.
    fn load_candidates(&self) -> Vec<CandidateResult>;
}

/// A harness results JSON file.
#[derive(Debug, Clone)]
pub struct HarnessFile {
    path: PathBuf,
}

impl HarnessFile {
    /// Read from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BaselineSource for HarnessFile {
    fn load_baseline(&self) -> Vec<BenchmarkResult> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "baseline results not found");
            return Vec::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read baseline results");
                return Vec::new();
            }
        };
        let entries: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to parse baseline results");
                return Vec::new();
            }
        };

        let mut results = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<BenchmarkResult>(entry) {
                Ok(result) => results.push(result),
                Err(e) => warn!(index, error = %e, "dropping baseline record"),
            }
        }
        info!(path = %self.path.display(), count = results.len(), "loaded baseline results");
        results
    }
}

/// A BenchmarkDotNet artifact file or results directory.
#[derive(Debug, Clone)]
pub struct ArtifactSource {
    path: PathBuf,
    comparison_n: usize,
}

impl ArtifactSource {
    /// Read from `path`, keeping records of size `comparison_n`.
    pub fn new(path: impl Into<PathBuf>, comparison_n: usize) -> Self {
        Self {
            path: path.into(),
            comparison_n,
        }
    }
}

impl CandidateSource for ArtifactSource {
    fn load_candidates(&self) -> Vec<CandidateResult> {
        load_artifacts(&self.path, self.comparison_n)
    }
}
