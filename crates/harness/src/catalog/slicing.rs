//! Views and reductions over views, float64.

use arraybench_core::DType;
use ndarray::s;
use std::hint::black_box;

use super::{Scenario, Suite};
use crate::element::random_array;

/// Bounds of the contiguous `a[100:1000]` slice, clamped to `n`.
fn window(n: usize) -> (usize, usize) {
    (100.min(n), 1000.min(n))
}

/// Slicing scenarios.
pub fn scenarios(n: usize) -> Vec<Scenario> {
    let (lo, hi) = window(n);
    let strided_len = (n + 1) / 2;

    vec![
        Scenario::new("a[100:1000] (contiguous)", "Slice", Suite::Slicing, DType::Float64, hi - lo, move |rng| {
            let a = random_array::<f64>(rng, n);
            Box::new(move || {
                black_box(a.slice(s![lo..hi]));
            })
        }),
        Scenario::new("a[::2] (strided)", "Slice", Suite::Slicing, DType::Float64, strided_len, move |rng| {
            let a = random_array::<f64>(rng, n);
            Box::new(move || {
                black_box(a.slice(s![..;2]));
            })
        }),
        Scenario::new("a[::-1] (reversed)", "Slice", Suite::Slicing, DType::Float64, n, move |rng| {
            let a = random_array::<f64>(rng, n);
            Box::new(move || {
                black_box(a.slice(s![..;-1]));
            })
        }),
        Scenario::new("np.sum(contiguous_slice)", "SliceSum", Suite::Slicing, DType::Float64, hi - lo, move |rng| {
            let a = random_array::<f64>(rng, n);
            Box::new(move || {
                black_box(a.slice(s![lo..hi]).sum());
            })
        }),
        Scenario::new("np.sum(strided_slice)", "SliceSum", Suite::Slicing, DType::Float64, strided_len, move |rng| {
            let a = random_array::<f64>(rng, n);
            Box::new(move || {
                black_box(a.slice(s![..;2]).sum());
            })
        }),
    ]
}
