// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Join keys, the candidate index and the merge.

use std::collections::HashMap;

use arraybench_core::canonical_dtype;
use arraybench_harness::BenchmarkResult;
use tracing::debug;

use crate::artifact::CandidateResult;
use crate::normalize::normalize_name;
use crate::unified::UnifiedResult;

/// Normalized operation plus canonical element type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    /// Normalized operation string.
    pub operation: String,
    /// Canonical dtype name.
    pub dtype: String,
}

impl MatchKey {
    /// Build a key from already-normalized parts.
    pub fn new(operation: impl Into<String>, dtype: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            dtype: dtype.into(),
        }
    }

    /// Key for a harness result.
    pub fn for_baseline(result: &BenchmarkResult) -> Self {
        Self::new(normalize_name(&result.operation), canonical_dtype(&result.dtype))
    }
}

/// Candidate results indexed by key. Later records replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    entries: HashMap<MatchKey, CandidateResult>,
}

impl CandidateIndex {
    /// Index `candidates` in order.
    pub fn build(candidates: impl IntoIterator<Item = CandidateResult>) -> Self {
        let mut entries = HashMap::new();
        for candidate in candidates {
            let key = candidate.key.clone();
            if let Some(previous) = entries.insert(key, candidate) {
                debug!(
                    operation = %previous.key.operation,
                    dtype = %previous.key.dtype,
                    replaced = %previous.method,
                    "candidate key collision, keeping the later record"
                );
            }
        }
        Self { entries }
    }

    /// Candidate for `key`.
    pub fn get(&self, key: &MatchKey) -> Option<&CandidateResult> {
        self.entries.get(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no candidates were indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join every baseline result against the index, preserving baseline order.
pub fn merge(baseline: &[BenchmarkResult], index: &CandidateIndex) -> Vec<UnifiedResult> {
    baseline
        .iter()
        .map(|result| {
            let key = MatchKey::for_baseline(result);
            let candidate_ms = index.get(&key).map(|c| c.mean_ms);
            if candidate_ms.is_none() {
                debug!(operation = %key.operation, dtype = %key.dtype, "no candidate");
            }
            UnifiedResult::new(result, candidate_ms)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;
    use arraybench_harness::Summary;

    fn baseline(name: &str, dtype: &str, mean_ms: f64) -> BenchmarkResult {
        let summary = Summary {
            mean_ms,
            stddev_ms: 0.0,
            min_ms: mean_ms,
            max_ms: mean_ms,
            iterations: 1,
        };
        BenchmarkResult::new(name, "", "Arithmetic", dtype, 10_000_000, &summary)
    }

    fn candidate(operation: &str, dtype: &str, method: &str, mean_ms: f64) -> CandidateResult {
        CandidateResult {
            key: MatchKey::new(operation, dtype),
            method: method.to_string(),
            n: 10_000_000,
            mean_ms,
            stddev_ms: 0.0,
        }
    }

    #[test]
    fn test_baseline_key_normalizes() {
        let key = MatchKey::for_baseline(&baseline("np.sum(a, axis=0) (Double)", "Double", 1.0));
        assert_eq!(key, MatchKey::new("np.sum axis=0", "float64"));
    }

    #[test]
    fn test_merge_joins_and_preserves_order() {
        let baseline = vec![
            baseline("np.sum (int32)", "int32", 2.0),
            baseline("a + b (int32)", "int32", 12.0),
            baseline("a + b (float64)", "float64", 10.0),
        ];
        let index = CandidateIndex::build(vec![candidate("a + b", "int32", "Add_Elementwise", 18.0)]);
        let merged = merge(&baseline, &index);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].operation(), "np.sum (int32)");
        assert_eq!(merged[0].status(), Status::NoData);
        assert_eq!(merged[1].ratio(), Some(1.5));
        assert_eq!(merged[1].status(), Status::Close);
        assert_eq!(merged[2].candidate_ms(), None);
    }

    #[test]
    fn test_collision_keeps_last() {
        let index = CandidateIndex::build(vec![
            candidate("np.sum", "float64", "first", 1.0),
            candidate("np.sum", "float64", "second", 2.0),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&MatchKey::new("np.sum", "float64")).unwrap().method, "second");
    }

    #[test]
    fn test_reversed_candidate_order_same_joins_without_collisions() {
        let candidates = vec![
            candidate("a + b", "int32", "Add_Elementwise", 18.0),
            candidate("np.sum", "int32", "Sum_Full", 4.0),
        ];
        let baseline = vec![baseline("a + b (int32)", "int32", 12.0), baseline("np.sum (int32)", "int32", 2.0)];

        let forward = merge(&baseline, &CandidateIndex::build(candidates.clone()));
        let reversed = merge(&baseline, &CandidateIndex::build(candidates.into_iter().rev()));
        assert_eq!(forward, reversed);
    }

    fn by_key(merged: Vec<UnifiedResult>) -> HashMap<MatchKey, UnifiedResult> {
        merged
            .into_iter()
            .map(|r| (MatchKey::new(normalize_name(r.operation()), canonical_dtype(r.dtype())), r))
            .collect()
    }

    #[test]
    fn test_reversed_baseline_order() {
        let candidates = vec![
            candidate("a + b", "int32", "Add_Elementwise", 18.0),
            candidate("np.sum", "int32", "Sum_Full", 4.0),
            candidate("a * b", "float64", "Multiply_Elementwise", 30.0),
        ];
        let baseline = vec![
            baseline("a + b (int32)", "int32", 12.0),
            baseline("np.sum (int32)", "int32", 2.0),
            baseline("a * b (float64)", "float64", 10.0),
            baseline("np.sqrt (float32)", "float32", 5.0),
        ];
        let reversed_baseline: Vec<_> = baseline.iter().rev().cloned().collect();

        let forward = merge(&baseline, &CandidateIndex::build(candidates.clone()));
        let baseline_reversed = merge(&reversed_baseline, &CandidateIndex::build(candidates.clone()));
        let both_reversed = merge(&reversed_baseline, &CandidateIndex::build(candidates.into_iter().rev()));

        assert_eq!(baseline_reversed[0].operation(), "np.sqrt (float32)");
        let forward = by_key(forward);
        assert_eq!(forward.len(), 4);
        assert_eq!(forward, by_key(baseline_reversed));
        assert_eq!(forward, by_key(both_reversed));

        let add = &forward[&MatchKey::new("a + b", "int32")];
        assert_eq!(add.candidate_ms(), Some(18.0));
        assert_eq!(add.ratio(), Some(1.5));
        assert_eq!(forward[&MatchKey::new("np.sqrt", "float32")].status(), Status::NoData);
    }

    #[test]
    fn test_empty_sides() {
        assert!(merge(&[], &CandidateIndex::default()).is_empty());
        let merged = merge(&[baseline("a * b (int64)", "int64", 1.0)], &CandidateIndex::default());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].status(), Status::NoData);
    }
}
