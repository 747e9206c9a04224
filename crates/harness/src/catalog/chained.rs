//! Chained temporaries vs a single fused reduction, float64.

use arraybench_core::DType;
use ndarray::{stack, Axis};
use std::hint::black_box;

use super::{Scenario, Suite};
use crate::element::random_array;

/// Name of the left-to-right chained expression.
pub const CHAINED: &str = "a + b + c + d (chained)";

/// Name of the stacked reduction.
pub const FUSED: &str = "np.sum(stack, axis=0) (fused)";

/// Chained-expression scenarios; the fused one records its speedup over the
/// chained one.
pub fn scenarios(n: usize) -> Vec<Scenario> {
    vec![
        Scenario::new(CHAINED, "Chained", Suite::ChainedOps, DType::Float64, n, move |rng| {
            let a = random_array::<f64>(rng, n);
            let b = random_array::<f64>(rng, n);
            let c = random_array::<f64>(rng, n);
            let d = random_array::<f64>(rng, n);
            Box::new(move || {
                black_box(&(&(&a + &b) + &c) + &d);
            })
        }),
        Scenario::new(FUSED, "Chained", Suite::ChainedOps, DType::Float64, n, move |rng| {
            let parts: Vec<_> = (0..4).map(|_| random_array::<f64>(rng, n)).collect();
            let views: Vec<_> = parts.iter().map(|p| p.view()).collect();
            let stacked = stack(Axis(0), &views).ok();
            Box::new(move || {
                black_box(stacked.as_ref().map(|s| s.sum_axis(Axis(0))));
            })
        })
        .relative_to(CHAINED),
    ]
}
