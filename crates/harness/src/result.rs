//! Benchmark result types.
//!
//! This module provides the `BenchmarkResult` record written by the harness
//! and read back as the baseline side of a comparison.

use arraybench_core::COMPARISON_SIZE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timing::Summary;

fn default_dtype() -> String {
    "float64".to_string()
}

fn default_n() -> usize {
    COMPARISON_SIZE
}

/// One timed scenario.
///
/// Field names on the wire follow the harness JSON format, so files written
/// by other harnesses using the same layout load as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Scenario name, e.g. `a + b (int32)`.
    #[serde(rename = "name", alias = "operation")]
    pub operation: String,
    /// Operation family.
    #[serde(default)]
    pub category: String,
    /// Suite the scenario belongs to.
    #[serde(default)]
    pub suite: String,
    /// Element type name.
    #[serde(default = "default_dtype")]
    pub dtype: String,
    /// Element count.
    #[serde(default = "default_n")]
    pub n: usize,
    /// Mean wall time in milliseconds.
    #[serde(default)]
    pub mean_ms: f64,
    /// Population standard deviation in milliseconds.
    #[serde(default)]
    pub stddev_ms: f64,
    /// Fastest sample in milliseconds.
    #[serde(default)]
    pub min_ms: f64,
    /// Slowest sample in milliseconds.
    #[serde(default)]
    pub max_ms: f64,
    /// Number of measured samples.
    #[serde(default)]
    pub iterations: usize,
    /// Estimated bytes per second.
    #[serde(default)]
    pub throughput: f64,
    /// Mean of the scenario's reference divided by this mean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speedup_vs_baseline: Option<f64>,
    /// When the measurement finished.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Create a result from a timing summary.
    pub fn new(
        operation: impl Into<String>,
        category: impl Into<String>,
        suite: impl Into<String>,
        dtype: impl Into<String>,
        n: usize,
        summary: &Summary,
    ) -> Self {
        Self {
            operation: operation.into(),
            category: category.into(),
            suite: suite.into(),
            dtype: dtype.into(),
            n,
            mean_ms: summary.mean_ms,
            stddev_ms: summary.stddev_ms,
            min_ms: summary.min_ms,
            max_ms: summary.max_ms,
            iterations: summary.iterations,
            throughput: 0.0,
            speedup_vs_baseline: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the estimated throughput.
    pub fn with_throughput(mut self, bytes_per_sec: f64) -> Self {
        self.throughput = bytes_per_sec;
        self
    }

    /// Set the speedup relative to a reference scenario.
    pub fn with_speedup(mut self, speedup: f64) -> Self {
        self.speedup_vs_baseline = Some(speedup);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            mean_ms: 2.5,
            stddev_ms: 0.1,
            min_ms: 2.3,
            max_ms: 2.9,
            iterations: 50,
        }
    }

    #[test]
    fn test_new_copies_summary() {
        let result = BenchmarkResult::new("a + b (int32)", "Add", "Arithmetic", "int32", 1000, &summary());
        assert_eq!(result.mean_ms, 2.5);
        assert_eq!(result.iterations, 50);
        assert!(result.speedup_vs_baseline.is_none());
        assert!(result.timestamp <= Utc::now());
    }

    #[test]
    fn test_serializes_operation_as_name() {
        let result = BenchmarkResult::new("np.sum (float64)", "Sum", "Reduction", "float64", 10, &summary());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["name"], "np.sum (float64)");
        assert!(value.get("operation").is_none());
        assert!(value.get("speedup_vs_baseline").is_none());
    }

    #[test]
    fn test_lenient_deserialize_fills_defaults() {
        let json = r#"{"operation": "np.amax", "mean_ms": 1.25}"#;
        let result: BenchmarkResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.operation, "np.amax");
        assert_eq!(result.dtype, "float64");
        assert_eq!(result.n, 10_000_000);
        assert_eq!(result.suite, "");
        assert_eq!(result.mean_ms, 1.25);
    }

    #[test]
    fn test_builders() {
        let result = BenchmarkResult::new("x", "c", "s", "int64", 8, &summary())
            .with_throughput(1e9)
            .with_speedup(1.5);
        assert_eq!(result.throughput, 1e9);
        assert_eq!(result.speedup_vs_baseline, Some(1.5));
    }
}
