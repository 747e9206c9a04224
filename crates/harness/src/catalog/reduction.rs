//! Full and per-axis reductions.

use arraybench_core::DType;
use ndarray::{Array1, Array2, Axis};
use std::hint::black_box;

use super::{matrix_dims, Scenario, Suite};
use crate::element::{random_array, Element, FloatElement};
use crate::{dispatch_arithmetic, dispatch_float};

/// Reduction scenarios for each of `dtypes`; `np.var` and `np.std` only for
/// floating types.
pub fn scenarios(dtypes: &[DType], n: usize) -> Vec<Scenario> {
    dtypes
        .iter()
        .flat_map(|&dtype| {
            let mut batch = dispatch_arithmetic!(dtype, reductions(n));
            batch.extend(dispatch_float!(dtype, spread(n)));
            batch
        })
        .collect()
}

fn reductions<T: Element>(n: usize) -> Vec<Scenario> {
    vec![
        full::<T>("np.sum", "Sum", n, |a| {
            black_box(T::sum_array(a));
        }),
        axis::<T>("np.sum axis=0", n, Axis(0)),
        axis::<T>("np.sum axis=1", n, Axis(1)),
        full::<T>("np.mean", "Mean", n, |a| {
            black_box(T::mean_array(a));
        }),
        full::<T>("np.amin", "MinMax", n, |a| {
            black_box(extreme(a, |x, m| x < m));
        }),
        full::<T>("np.amax", "MinMax", n, |a| {
            black_box(extreme(a, |x, m| x > m));
        }),
        full::<T>("np.argmin", "ArgMinMax", n, |a| {
            black_box(arg_extreme(a, |x, m| x < m));
        }),
        full::<T>("np.argmax", "ArgMinMax", n, |a| {
            black_box(arg_extreme(a, |x, m| x > m));
        }),
    ]
}

fn spread<T: FloatElement>(n: usize) -> Vec<Scenario> {
    vec![
        full::<T>("np.var", "Var", n, |a| {
            black_box(T::var_array(a));
        }),
        full::<T>("np.std", "Var", n, |a| {
            black_box(T::std_array(a));
        }),
    ]
}

fn full<T: Element>(op: &str, category: &'static str, n: usize, f: fn(&Array1<T>)) -> Scenario {
    let name = format!("{op} ({})", T::DTYPE);
    Scenario::new(name, category, Suite::Reduction, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        Box::new(move || f(&a))
    })
}

fn axis<T: Element>(op: &str, n: usize, axis: Axis) -> Scenario {
    let name = format!("{op} ({})", T::DTYPE);
    let (rows, cols) = matrix_dims(n);
    Scenario::new(name, "Sum", Suite::Reduction, T::DTYPE, rows * cols, move |rng| {
        let a = Array2::from_shape_fn((rows, cols), |_| T::sample(rng));
        Box::new(move || {
            black_box(T::sum_axis_array(&a, axis));
        })
    })
}

fn extreme<T: Element>(a: &Array1<T>, better: fn(T, T) -> bool) -> Option<T> {
    a.iter().copied().reduce(|m, x| if better(x, m) { x } else { m })
}

fn arg_extreme<T: Element>(a: &Array1<T>, better: fn(T, T) -> bool) -> Option<usize> {
    let mut iter = a.iter().copied().enumerate();
    let (mut best_idx, mut best) = iter.next()?;
    for (i, x) in iter {
        if better(x, best) {
            best_idx = i;
            best = x;
        }
    }
    Some(best_idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_helpers() {
        let a = array![3i32, -1, 7, 7, -1];
        assert_eq!(i32::sum_array(&a), 15);
        assert_eq!(extreme(&a, |x, m| x < m), Some(-1));
        assert_eq!(extreme(&a, |x, m| x > m), Some(7));
        assert_eq!(arg_extreme(&a, |x, m| x < m), Some(1));
        assert_eq!(arg_extreme(&a, |x, m| x > m), Some(2));
        assert_eq!(arg_extreme(&Array1::<i32>::zeros(0), |x, m| x < m), None);
    }

    #[test]
    fn test_population_variance() {
        let a = array![2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(f64::mean_array(&a), Some(5.0));
        assert!((f64::var_array(&a) - 4.0).abs() < 1e-12);
        assert!((f64::std_array(&a) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_integer_sums_wrap() {
        assert_eq!(u8::sum_array(&array![200u8, 100]), 44);
        let m = Array2::from_shape_vec((2, 2), vec![200u8, 100, 100, 100]).unwrap();
        assert_eq!(u8::sum_axis_array(&m, Axis(0)), array![44u8, 200]);
        assert_eq!(u8::sum_axis_array(&m, Axis(1)), array![44u8, 200]);
    }

    #[test]
    fn test_every_scenario_runs() {
        for dtype in [DType::UInt8, DType::Int64, DType::Float32] {
            for scenario in scenarios(&[dtype], 64) {
                let mut workload = scenario.instantiate(3);
                workload();
            }
        }
    }

    #[test]
    fn test_var_only_for_floats() {
        assert_eq!(scenarios(&[DType::UInt32], 16).len(), 8);
        let floats = scenarios(&[DType::Float64], 16);
        assert_eq!(floats.len(), 10);
        assert!(floats.iter().any(|s| s.name() == "np.std (float64)"));
    }

    #[test]
    fn test_axis_scenarios_use_matrix_size() {
        let batch = scenarios(&[DType::Int32], 50);
        let axis0 = batch.iter().find(|s| s.name() == "np.sum axis=0 (int32)").unwrap();
        assert_eq!(axis0.n(), 49);
    }
}
