//! Allocating vs preallocated `a + b` across a geometric size sweep.
//!
//! Each size yields an allocating scenario followed by a preallocated one
//! that records its speedup relative to the allocating run.
//! [`crossover_points`] reads those speedups back out of the results.

use arraybench_core::DType;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::hint::black_box;

use super::{Scenario, Suite};
use crate::dispatch_arithmetic;
use crate::element::{random_array, Element};
use crate::result::BenchmarkResult;

/// Name of the allocating scenario for `dtype`.
pub fn alloc_name(dtype: DType) -> String {
    format!("a + b alloc ({dtype})")
}

/// Name of the preallocated scenario for `dtype`.
pub fn prealloc_name(dtype: DType) -> String {
    format!("a + b out=c ({dtype})")
}

/// Sweep scenarios for each dtype and size.
pub fn scenarios(dtypes: &[DType], sizes: &[usize]) -> Vec<Scenario> {
    dtypes
        .iter()
        .flat_map(|&dtype| sizes.iter().flat_map(move |&n| dispatch_arithmetic!(dtype, pair(n))))
        .collect()
}

fn pair<T: Element>(n: usize) -> Vec<Scenario> {
    let alloc = Scenario::new(alloc_name(T::DTYPE), "Threshold", Suite::SizeThresholds, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        let b = random_array::<T>(rng, n);
        Box::new(move || {
            black_box(T::add_arrays(&a, &b));
        })
    });

    let prealloc = Scenario::new(prealloc_name(T::DTYPE), "Threshold", Suite::SizeThresholds, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        let b = random_array::<T>(rng, n);
        let mut c = Array1::from_elem(n, T::ZERO);
        Box::new(move || {
            T::add_into(&mut c, &a, &b);
            black_box(&c);
        })
    })
    .relative_to(alloc_name(T::DTYPE));

    vec![alloc, prealloc]
}

/// Smallest swept size at which the preallocated path won, per dtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossover {
    /// Element type name.
    pub dtype: String,
    /// First size with speedup above 1, if any.
    pub n: Option<usize>,
    /// Speedup measured at that size.
    pub speedup: Option<f64>,
}

/// Find crossover points in a run's results, dtypes in first-seen order.
pub fn crossover_points(results: &[BenchmarkResult]) -> Vec<Crossover> {
    let mut points: Vec<Crossover> = Vec::new();

    for result in results {
        if result.suite != Suite::SizeThresholds.name() {
            continue;
        }
        let Some(speedup) = result.speedup_vs_baseline else {
            continue;
        };

        let index = match points.iter().position(|p| p.dtype == result.dtype) {
            Some(index) => index,
            None => {
                points.push(Crossover {
                    dtype: result.dtype.clone(),
                    n: None,
                    speedup: None,
                });
                points.len() - 1
            }
        };

        let point = &mut points[index];
        if speedup > 1.0 && point.n.map_or(true, |n| result.n < n) {
            point.n = Some(result.n);
            point.speedup = Some(speedup);
        }
    }

    points
}
