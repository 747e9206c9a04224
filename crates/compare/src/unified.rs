// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The joined comparison record.

use arraybench_harness::BenchmarkResult;
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// What the candidate side contributed to a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// No candidate record shares the key.
    Unmatched,
    /// A candidate matched but the baseline time cannot be divided by.
    Incomparable {
        /// Candidate mean in milliseconds.
        candidate_ms: f64,
    },
    /// Both sides present with a usable ratio.
    Compared {
        /// Candidate mean in milliseconds.
        candidate_ms: f64,
        /// `candidate_ms / baseline_ms`.
        ratio: f64,
    },
}

impl Outcome {
    /// Combine a baseline time with an optional candidate time.
    pub fn evaluate(baseline_ms: f64, candidate_ms: Option<f64>) -> Self {
        match candidate_ms {
            None => Outcome::Unmatched,
            Some(candidate_ms) if baseline_ms > 0.0 => Outcome::Compared {
                candidate_ms,
                ratio: candidate_ms / baseline_ms,
            },
            Some(candidate_ms) => Outcome::Incomparable { candidate_ms },
        }
    }
}

/// One baseline result joined with its candidate, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "UnifiedRecord", try_from = "UnifiedRecord")]
pub struct UnifiedResult {
    operation: String,
    suite: String,
    category: String,
    dtype: String,
    n: usize,
    baseline_ms: f64,
    outcome: Outcome,
}

impl UnifiedResult {
    /// Join a baseline result with an optional candidate mean.
    pub fn new(baseline: &BenchmarkResult, candidate_ms: Option<f64>) -> Self {
        Self {
            operation: baseline.operation.clone(),
            suite: baseline.suite.clone(),
            category: baseline.category.clone(),
            dtype: baseline.dtype.clone(),
            n: baseline.n,
            baseline_ms: baseline.mean_ms,
            outcome: Outcome::evaluate(baseline.mean_ms, candidate_ms),
        }
    }

    /// Baseline operation name, unnormalized.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Baseline suite; may be empty.
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Baseline category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Baseline element type.
    pub fn dtype(&self) -> &str {
        &self.dtype
    }

    /// Baseline element count.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Baseline mean in milliseconds.
    pub fn baseline_ms(&self) -> f64 {
        self.baseline_ms
    }

    /// How the candidate side resolved.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Candidate mean in milliseconds, when matched.
    pub fn candidate_ms(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Unmatched => None,
            Outcome::Incomparable { candidate_ms } | Outcome::Compared { candidate_ms, .. } => Some(candidate_ms),
        }
    }

    /// Candidate over baseline, when both are usable.
    pub fn ratio(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Compared { ratio, .. } => Some(ratio),
            _ => None,
        }
    }

    /// Status band of [`ratio`](Self::ratio).
    pub fn status(&self) -> Status {
        Status::from_ratio(self.ratio())
    }
}

/// Flat wire form of [`UnifiedResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedRecord {
    /// Operation name.
    pub operation: String,
    /// Suite name.
    #[serde(default)]
    pub suite: String,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Element type.
    pub dtype: String,
    /// Element count.
    pub n: usize,
    /// Baseline mean in milliseconds.
    pub baseline_ms: f64,
    /// Candidate mean in milliseconds.
    pub candidate_ms: Option<f64>,
    /// Candidate over baseline.
    pub ratio: Option<f64>,
    /// Status band.
    pub status: Status,
}

impl From<UnifiedResult> for UnifiedRecord {
    fn from(result: UnifiedResult) -> Self {
        let candidate_ms = result.candidate_ms();
        let ratio = result.ratio();
        let status = result.status();
        Self {
            operation: result.operation,
            suite: result.suite,
            category: result.category,
            dtype: result.dtype,
            n: result.n,
            baseline_ms: result.baseline_ms,
            candidate_ms,
            ratio,
            status,
        }
    }
}

impl TryFrom<UnifiedRecord> for UnifiedResult {
    type Error = String;

    fn try_from(record: UnifiedRecord) -> Result<Self, Self::Error> {
        let comparable = record.baseline_ms > 0.0;
        let outcome = match (record.candidate_ms, record.ratio) {
            (None, None) => Outcome::Unmatched,
            (Some(candidate_ms), None) if !comparable => Outcome::Incomparable { candidate_ms },
            (Some(candidate_ms), Some(ratio)) if comparable => Outcome::Compared { candidate_ms, ratio },
            (Some(_), None) => {
                return Err(format!("{}: candidate present but ratio missing", record.operation));
            }
            (Some(_), Some(_)) => {
                return Err(format!("{}: ratio present but baseline_ms is not positive", record.operation));
            }
            (None, Some(_)) => {
                return Err(format!("{}: ratio present without candidate_ms", record.operation));
            }
        };

        let result = Self {
            operation: record.operation,
            suite: record.suite,
            category: record.category,
            dtype: record.dtype,
            n: record.n,
            baseline_ms: record.baseline_ms,
            outcome,
        };
        if result.status() != record.status {
            return Err(format!(
                "{}: status {} does not match ratio (expected {})",
                result.operation,
                record.status,
                result.status()
            ));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arraybench_harness::Summary;

    fn baseline(mean_ms: f64) -> BenchmarkResult {
        let summary = Summary {
            mean_ms,
            stddev_ms: 0.0,
            min_ms: mean_ms,
            max_ms: mean_ms,
            iterations: 1,
        };
        BenchmarkResult::new("a + b (int32)", "Add", "Arithmetic", "int32", 10_000_000, &summary)
    }

    #[test]
    fn test_compared() {
        let result = UnifiedResult::new(&baseline(12.0), Some(18.0));
        assert_eq!(result.candidate_ms(), Some(18.0));
        assert_eq!(result.ratio(), Some(1.5));
        assert_eq!(result.status(), Status::Close);
    }

    #[test]
    fn test_unmatched() {
        let result = UnifiedResult::new(&baseline(12.0), None);
        assert_eq!(result.candidate_ms(), None);
        assert_eq!(result.ratio(), None);
        assert_eq!(result.status(), Status::NoData);
    }

    #[test]
    fn test_zero_baseline_is_incomparable() {
        let result = UnifiedResult::new(&baseline(0.0), Some(3.0));
        assert_eq!(result.outcome(), Outcome::Incomparable { candidate_ms: 3.0 });
        assert_eq!(result.candidate_ms(), Some(3.0));
        assert_eq!(result.ratio(), None);
        assert_eq!(result.status(), Status::NoData);
    }

    #[test]
    fn test_zero_candidate_is_a_measured_time() {
        let result = UnifiedResult::new(&baseline(12.0), Some(0.0));
        assert_eq!(result.outcome(), Outcome::Compared { candidate_ms: 0.0, ratio: 0.0 });
        assert_eq!(result.ratio(), Some(0.0));
        assert_eq!(result.status(), Status::Faster);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(serde_json::from_str::<UnifiedResult>(&json).unwrap(), result);
    }

    #[test]
    fn test_serializes_flat_record() {
        let value = serde_json::to_value(UnifiedResult::new(&baseline(12.0), Some(18.0))).unwrap();
        assert_eq!(value["operation"], "a + b (int32)");
        assert_eq!(value["baseline_ms"], 12.0);
        assert_eq!(value["candidate_ms"], 18.0);
        assert_eq!(value["ratio"], 1.5);
        assert_eq!(value["status"], "close");

        let unmatched = serde_json::to_value(UnifiedResult::new(&baseline(12.0), None)).unwrap();
        assert!(unmatched["candidate_ms"].is_null());
        assert!(unmatched["ratio"].is_null());
        assert_eq!(unmatched["status"], "no_data");
    }

    #[test]
    fn test_deserialize_round_trip() {
        for result in [
            UnifiedResult::new(&baseline(12.0), Some(18.0)),
            UnifiedResult::new(&baseline(12.0), None),
            UnifiedResult::new(&baseline(0.0), Some(1.0)),
        ] {
            let json = serde_json::to_string(&result).unwrap();
            assert_eq!(serde_json::from_str::<UnifiedResult>(&json).unwrap(), result);
        }
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_records() {
        let ratio_without_candidate = r#"{"operation": "x", "dtype": "int32", "n": 1, "baseline_ms": 1.0,
            "candidate_ms": null, "ratio": 2.0, "status": "close"}"#;
        assert!(serde_json::from_str::<UnifiedResult>(ratio_without_candidate).is_err());

        let wrong_status = r#"{"operation": "x", "dtype": "int32", "n": 1, "baseline_ms": 1.0,
            "candidate_ms": 9.0, "ratio": 9.0, "status": "faster"}"#;
        assert!(serde_json::from_str::<UnifiedResult>(wrong_status).is_err());

        let missing_ratio = r#"{"operation": "x", "dtype": "int32", "n": 1, "baseline_ms": 1.0,
            "candidate_ms": 9.0, "ratio": null, "status": "no_data"}"#;
        assert!(serde_json::from_str::<UnifiedResult>(missing_ratio).is_err());
    }
}
