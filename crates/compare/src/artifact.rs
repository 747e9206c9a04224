// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! BenchmarkDotNet JSON artifacts.
//!
//! Only the fields needed for matching are read. Every entry of the
//! `Benchmarks` array is parsed on its own so one malformed entry cannot
//! spoil the rest of the file.

use std::fs;
use std::path::{Path, PathBuf};

use arraybench_core::{canonical_dtype, COMPARISON_SIZE};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ArtifactError;
use crate::matcher::MatchKey;
use crate::normalize::external_operation;

/// File name suffixes recognized when scanning a results directory, in
/// load order.
pub const ARTIFACT_SUFFIXES: &[&str] = &["-report.json", "-report-full-compressed.json"];

/// Element type assumed when `Parameters` names none.
pub const DEFAULT_DTYPE: &str = "float64";

const NS_PER_MS: f64 = 1_000_000.0;

/// Top level of an artifact file.
#[derive(Debug, Deserialize)]
pub struct ArtifactDocument {
    /// Raw benchmark entries.
    #[serde(rename = "Benchmarks", default)]
    pub benchmarks: Vec<serde_json::Value>,
}

/// One `Benchmarks` entry as written by BenchmarkDotNet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawBenchmark {
    /// Benchmark method identifier.
    #[serde(default)]
    pub method: Option<String>,
    /// Display title, often quoted.
    #[serde(default)]
    pub method_title: Option<String>,
    /// Parameter string such as `N=10000000&DType=Int32`.
    #[serde(default)]
    pub parameters: Option<String>,
    /// Timing statistics in nanoseconds.
    #[serde(default)]
    pub statistics: Option<RawStatistics>,
}

/// Timing statistics in nanoseconds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStatistics {
    /// Mean time per operation.
    #[serde(default)]
    pub mean: Option<f64>,
    /// Standard deviation.
    #[serde(default)]
    pub standard_deviation: Option<f64>,
    /// Older spelling of the standard deviation.
    #[serde(default)]
    pub std_dev: Option<f64>,
}

/// A parsed external measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateResult {
    /// Join key.
    pub key: MatchKey,
    /// Raw method identifier.
    pub method: String,
    /// Element count.
    pub n: usize,
    /// Mean in milliseconds.
    pub mean_ms: f64,
    /// Standard deviation in milliseconds.
    pub stddev_ms: f64,
}

/// Size and type carried by a `Parameters` string.
///
/// Entries are separated by `&` or `, `. Missing size defaults to
/// [`COMPARISON_SIZE`] and missing type to [`DEFAULT_DTYPE`].
pub fn parse_parameters(params: &str) -> Result<(usize, String), ArtifactError> {
    let mut n = COMPARISON_SIZE;
    let mut dtype = DEFAULT_DTYPE.to_string();

    for part in params.split('&').flat_map(|p| p.split(", ")) {
        let part = part.trim();
        if let Some(value) = part.strip_prefix("N=") {
            n = value.trim().parse().map_err(|_| ArtifactError::InvalidParameter {
                key: "N",
                value: value.to_string(),
            })?;
        } else if let Some(value) = part.strip_prefix("DType=") {
            dtype = canonical_dtype(value);
        }
    }

    Ok((n, dtype))
}

impl CandidateResult {
    /// Convert a raw entry.
    pub fn from_raw(raw: &RawBenchmark) -> Result<Self, ArtifactError> {
        let method = raw
            .method
            .as_deref()
            .or(raw.method_title.as_deref())
            .ok_or(ArtifactError::MissingMethod)?;
        let (n, dtype) = parse_parameters(raw.parameters.as_deref().unwrap_or(""))?;

        let stats = raw.statistics.as_ref().ok_or(ArtifactError::MissingMean)?;
        let mean_ns = stats.mean.ok_or(ArtifactError::MissingMean)?;
        if !mean_ns.is_finite() || mean_ns < 0.0 {
            return Err(ArtifactError::InvalidMean(mean_ns));
        }
        let stddev_ns = stats
            .standard_deviation
            .or(stats.std_dev)
            .filter(|s| s.is_finite())
            .unwrap_or(0.0);

        Ok(Self {
            key: MatchKey::new(external_operation(method, raw.method_title.as_deref()), dtype),
            method: method.to_string(),
            n,
            mean_ms: mean_ns / NS_PER_MS,
            stddev_ms: stddev_ns / NS_PER_MS,
        })
    }

    /// Parse a JSON entry.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ArtifactError> {
        let raw: RawBenchmark = serde_json::from_value(value)?;
        Self::from_raw(&raw)
    }
}

/// Parse every usable entry of an artifact document, keeping only records
/// of size `comparison_n`.
pub fn parse_document(document: ArtifactDocument, comparison_n: usize) -> Vec<CandidateResult> {
    let mut results = Vec::new();
    for (index, entry) in document.benchmarks.into_iter().enumerate() {
        match CandidateResult::from_value(entry) {
            Ok(result) if result.n == comparison_n => results.push(result),
            Ok(result) => debug!(method = %result.method, n = result.n, "skipping record of other size"),
            Err(e) => warn!(index, error = %e, "dropping benchmark record"),
        }
    }
    results
}

/// Load one artifact file. Unreadable or invalid files yield no records.
pub fn load_artifact_file(path: &Path, comparison_n: usize) -> Vec<CandidateResult> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read artifact");
            return Vec::new();
        }
    };
    let document: ArtifactDocument = match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse artifact");
            return Vec::new();
        }
    };
    let results = parse_document(document, comparison_n);
    info!(path = %path.display(), count = results.len(), "loaded artifact");
    results
}

/// Artifact files under `dir`, grouped by [`ARTIFACT_SUFFIXES`] order and
/// sorted by path within each group.
pub fn discover_artifacts(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut names: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    names.sort();

    let suffix_of = |path: &Path| {
        let name = path.file_name()?.to_str()?;
        ARTIFACT_SUFFIXES.iter().position(|suffix| name.ends_with(suffix))
    };

    let mut ordered = Vec::new();
    for group in 0..ARTIFACT_SUFFIXES.len() {
        ordered.extend(names.iter().filter(|p| suffix_of(p.as_path()) == Some(group)).cloned());
    }
    Ok(ordered)
}

/// Load candidates from a single artifact file or a results directory.
///
/// A missing path or unreadable directory is logged and yields no records.
pub fn load_artifacts(path: &Path, comparison_n: usize) -> Vec<CandidateResult> {
    if path.is_file() {
        return load_artifact_file(path, comparison_n);
    }
    if !path.exists() {
        warn!(path = %path.display(), "artifact path not found");
        return Vec::new();
    }

    match discover_artifacts(path) {
        Ok(files) => {
            if files.is_empty() {
                warn!(path = %path.display(), "no artifact files found");
            }
            files
                .iter()
                .flat_map(|file| load_artifact_file(file, comparison_n))
                .collect()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot list artifact directory");
            Vec::new()
        }
    }
}
