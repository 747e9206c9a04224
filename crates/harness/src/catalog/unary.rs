//! Elementwise unary math.

use arraybench_core::DType;
use ndarray::Array1;
use rand::rngs::StdRng;
use std::hint::black_box;

use super::{Scenario, Suite};
use crate::element::{positive_array, random_array, Element, FloatElement};
use crate::{dispatch_arithmetic, dispatch_float};

/// `np.abs` and `np.sign` for every type; the remaining functions for
/// floating types only.
pub fn scenarios(dtypes: &[DType], n: usize) -> Vec<Scenario> {
    dtypes
        .iter()
        .flat_map(|&dtype| {
            let mut batch = dispatch_arithmetic!(dtype, sign_and_abs(n));
            batch.extend(dispatch_float!(dtype, transcendental(n)));
            batch
        })
        .collect()
}

fn sign_and_abs<T: Element>(n: usize) -> Vec<Scenario> {
    vec![
        unary::<T>("np.abs", "Math", n, random_array::<T>, T::abs_value),
        unary::<T>("np.sign", "Math", n, random_array::<T>, T::sign),
    ]
}

fn transcendental<T: FloatElement>(n: usize) -> Vec<Scenario> {
    vec![
        unary::<T>("np.sqrt", "Math", n, positive_array::<T>, T::sqrt),
        unary::<T>("np.floor", "Rounding", n, random_array::<T>, T::floor),
        unary::<T>("np.ceil", "Rounding", n, random_array::<T>, T::ceil),
        unary::<T>("np.round", "Rounding", n, random_array::<T>, T::round),
        unary::<T>("np.exp", "ExpLog", n, random_array::<T>, T::exp),
        unary::<T>("np.log", "ExpLog", n, positive_array::<T>, T::ln),
        unary::<T>("np.log10", "ExpLog", n, positive_array::<T>, T::log10),
        unary::<T>("np.sin", "Trig", n, random_array::<T>, T::sin),
        unary::<T>("np.cos", "Trig", n, random_array::<T>, T::cos),
    ]
}

fn unary<T: Element>(
    op: &str,
    category: &'static str,
    n: usize,
    input: fn(&mut StdRng, usize) -> Array1<T>,
    f: fn(T) -> T,
) -> Scenario {
    let name = format!("{op} ({})", T::DTYPE);
    Scenario::new(name, category, Suite::Unary, T::DTYPE, n, move |rng| {
        let a = input(rng, n);
        Box::new(move || {
            black_box(a.mapv(f));
        })
    })
}
