//! Property tests for name normalization and classification.

use arraybench_compare::{normalize_name, CanonicalOp, Outcome, Status, UnifiedResult};
use arraybench_harness::{BenchmarkResult, Summary};
use proptest::prelude::*;

fn baseline(mean_ms: f64) -> BenchmarkResult {
    let summary = Summary {
        mean_ms,
        stddev_ms: 0.0,
        min_ms: mean_ms,
        max_ms: mean_ms,
        iterations: 1,
    };
    BenchmarkResult::new("a + b (float64)", "Add", "Arithmetic", "float64", 10_000_000, &summary)
}

fn op_name() -> impl Strategy<Value = String> {
    prop::sample::select(CanonicalOp::ALL.to_vec()).prop_map(|op| op.as_str().to_string())
}

fn annotation() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int32".to_string()),
        Just("float64".to_string()),
        Just("element-wise".to_string()),
        "[a-z0-9 ,=]{1,12}",
    ]
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(name in "[ -~]{0,40}") {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn prop_annotated_names_normalize_to_canonical(
        op in op_name(),
        annotations in prop::collection::vec(annotation(), 0..3),
        quoted in any::<bool>(),
    ) {
        let mut name = op.clone();
        for a in &annotations {
            name.push_str(&format!(" ({a})"));
        }
        if quoted {
            name = format!("'{name}'");
        }
        prop_assert_eq!(normalize_name(&name), op);
    }

    #[test]
    fn prop_outcome_fields_are_consistent(
        baseline_ms in 0.0f64..1e4,
        candidate_ms in prop::option::of(0.0f64..1e4),
    ) {
        let result = UnifiedResult::new(&baseline(baseline_ms), candidate_ms);
        prop_assert_eq!(result.candidate_ms(), candidate_ms);
        match result.outcome() {
            Outcome::Unmatched => {
                prop_assert!(candidate_ms.is_none());
                prop_assert_eq!(result.status(), Status::NoData);
            }
            Outcome::Incomparable { .. } => {
                prop_assert!(baseline_ms <= 0.0);
                prop_assert!(result.ratio().is_none());
                prop_assert_eq!(result.status(), Status::NoData);
            }
            Outcome::Compared { ratio, .. } => {
                prop_assert!(baseline_ms > 0.0);
                prop_assert_eq!(result.ratio(), Some(ratio));
                prop_assert_eq!(result.status(), Status::from_ratio(Some(ratio)));
            }
        }
    }
}
