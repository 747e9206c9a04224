//! Array constructors.

use arraybench_core::DType;
use ndarray::Array1;
use std::hint::black_box;
use std::mem::MaybeUninit;

use super::{Scenario, Suite};
use crate::dispatch_arithmetic;
use crate::element::{random_array, Element};

/// Fill value for `np.full`.
pub const FILL_VALUE: u8 = 42;

/// Creation scenarios for each of `dtypes`.
pub fn scenarios(dtypes: &[DType], n: usize) -> Vec<Scenario> {
    dtypes
        .iter()
        .flat_map(|&dtype| dispatch_arithmetic!(dtype, constructors(n)))
        .collect()
}

fn constructors<T: Element>(n: usize) -> Vec<Scenario> {
    let named = |op: &str| format!("{op} ({})", T::DTYPE);
    vec![
        Scenario::new(named("np.zeros"), "Creation", Suite::Creation, T::DTYPE, n, move |_| {
            Box::new(move || {
                black_box(Array1::from_elem(n, T::ZERO));
            })
        }),
        Scenario::new(named("np.ones"), "Creation", Suite::Creation, T::DTYPE, n, move |_| {
            Box::new(move || {
                black_box(Array1::from_elem(n, T::ONE));
            })
        }),
        Scenario::new(named("np.full"), "Creation", Suite::Creation, T::DTYPE, n, move |_| {
            let fill = T::from_small(FILL_VALUE);
            Box::new(move || {
                black_box(Array1::from_elem(n, fill));
            })
        }),
        Scenario::new(named("np.empty"), "Creation", Suite::Creation, T::DTYPE, n, move |_| {
            Box::new(move || {
                black_box(Array1::<MaybeUninit<T>>::uninit(n));
            })
        }),
        Scenario::new(named("np.copy"), "Creation", Suite::Creation, T::DTYPE, n, move |rng| {
            let source = random_array::<T>(rng, n);
            Box::new(move || {
                black_box(source.to_owned());
            })
        }),
        Scenario::new(named("np.zeros_like"), "Creation", Suite::Creation, T::DTYPE, n, move |rng| {
            let source = random_array::<T>(rng, n);
            Box::new(move || {
                black_box(Array1::from_elem(source.raw_dim(), T::ZERO));
            })
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_constructors_per_type() {
        let batch = scenarios(&[DType::Int32, DType::Float64], 32);
        assert_eq!(batch.len(), 12);
        assert_eq!(batch[0].name(), "np.zeros (int32)");
        assert_eq!(batch[11].name(), "np.zeros_like (float64)");
    }

    #[test]
    fn test_constructors_run() {
        for scenario in scenarios(&[DType::Float32], 16) {
            let mut workload = scenario.instantiate(0);
            workload();
        }
    }
}
