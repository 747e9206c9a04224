//! Call overhead with and without a preallocated output, int32.

use arraybench_core::DType;
use ndarray::{Array1, Zip};
use std::hint::black_box;

use super::{Scenario, Suite};
use crate::element::{random_array, Element};

/// Dispatch scenarios.
pub fn scenarios(n: usize) -> Vec<Scenario> {
    vec![
        Scenario::new("np.add(a, b, out=c)", "Dispatch", Suite::Dispatch, DType::Int32, n, move |rng| {
            let a = random_array::<i32>(rng, n);
            let b = random_array::<i32>(rng, n);
            let mut c = Array1::<i32>::zeros(n);
            Box::new(move || {
                i32::add_into(&mut c, &a, &b);
                black_box(&c);
            })
        }),
        Scenario::new("c = a + b (allocates)", "Dispatch", Suite::Dispatch, DType::Int32, n, move |rng| {
            let a = random_array::<i32>(rng, n);
            let b = random_array::<i32>(rng, n);
            Box::new(move || {
                black_box(i32::add_arrays(&a, &b));
            })
        }),
        Scenario::new("np.add(a, scalar, out=c)", "Dispatch", Suite::Dispatch, DType::Int32, n, move |rng| {
            let a = random_array::<i32>(rng, n);
            let mut c = Array1::<i32>::zeros(n);
            Box::new(move || {
                Zip::from(&mut c).and(&a).for_each(|c, &x| *c = x.wrapping_add(5));
                black_box(&c);
            })
        }),
    ]
}
