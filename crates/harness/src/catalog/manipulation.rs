//! Reshape, transpose, flatten and join.

use arraybench_core::DType;
use ndarray::{concatenate, stack, Array1, Array2, ArrayView1, Axis};
use std::hint::black_box;

use super::{matrix_dims, Scenario, Suite};
use crate::element::{random_array, Element};

/// Manipulation scenarios over float64.
pub fn scenarios(n: usize) -> Vec<Scenario> {
    let (rows, cols) = matrix_dims(n);
    let size = rows * cols;
    let half = (n / 2).max(1);

    let matrix = move |rng: &mut rand::rngs::StdRng| {
        Array2::from_shape_fn((rows, cols), |_| f64::sample(rng))
    };

    vec![
        Scenario::new("reshape 1D->2D", "Reshape", Suite::Manipulation, DType::Float64, size, move |rng| {
            let a = random_array::<f64>(rng, size);
            Box::new(move || {
                black_box(a.view().into_shape((rows, cols)).ok());
            })
        }),
        Scenario::new("reshape 2D->1D", "Reshape", Suite::Manipulation, DType::Float64, size, move |rng| {
            let a = matrix(rng);
            Box::new(move || {
                black_box(a.view().into_shape(rows * cols).ok());
            })
        }),
        Scenario::new("a.T (2D)", "Transpose", Suite::Manipulation, DType::Float64, size, move |rng| {
            let a = matrix(rng);
            Box::new(move || {
                black_box(a.t());
            })
        }),
        Scenario::new("np.transpose (2D)", "Transpose", Suite::Manipulation, DType::Float64, size, move |rng| {
            let a = matrix(rng);
            Box::new(move || {
                black_box(a.view().reversed_axes());
            })
        }),
        Scenario::new("np.ravel", "Flatten", Suite::Manipulation, DType::Float64, size, move |rng| {
            let a = matrix(rng);
            Box::new(move || {
                black_box(a.as_slice().map(ArrayView1::from));
            })
        }),
        Scenario::new("a.flatten", "Flatten", Suite::Manipulation, DType::Float64, size, move |rng| {
            let a = matrix(rng);
            Box::new(move || {
                black_box(Array1::from_iter(a.iter().copied()));
            })
        }),
        Scenario::new("np.concatenate", "Join", Suite::Manipulation, DType::Float64, 2 * half, move |rng| {
            let a = random_array::<f64>(rng, half);
            let b = random_array::<f64>(rng, half);
            Box::new(move || {
                black_box(concatenate(Axis(0), &[a.view(), b.view()]).ok());
            })
        }),
        Scenario::new("np.stack", "Join", Suite::Manipulation, DType::Float64, 2 * half, move |rng| {
            let a = random_array::<f64>(rng, half);
            let b = random_array::<f64>(rng, half);
            Box::new(move || {
                black_box(stack(Axis(0), &[a.view(), b.view()]).ok());
            })
        }),
    ]
}
