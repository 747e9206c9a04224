//! Elementwise binary operations.

use arraybench_core::DType;
use ndarray::Array1;
use std::hint::black_box;

use super::{Scenario, Suite};
use crate::element::{positive_array, random_array, Element, FloatElement};
use crate::{dispatch_arithmetic, dispatch_float};

/// Scalar operand for `a + scalar`.
pub const SCALAR: u8 = 5;

/// Binary scenarios for each of `dtypes`; division only for floating types.
pub fn scenarios(dtypes: &[DType], n: usize) -> Vec<Scenario> {
    dtypes
        .iter()
        .flat_map(|&dtype| {
            let mut batch = dispatch_arithmetic!(dtype, common(n));
            batch.extend(dispatch_float!(dtype, division(n)));
            batch
        })
        .collect()
}

fn common<T: Element>(n: usize) -> Vec<Scenario> {
    vec![
        binary::<T>("a + b", "Add", n, T::add_arrays),
        scalar::<T>("a + scalar", "Add", n),
        binary::<T>("a - b", "Subtract", n, T::sub_arrays),
        binary::<T>("a * b", "Multiply", n, T::mul_arrays),
        square::<T>(n),
    ]
}

fn division<T: FloatElement>(n: usize) -> Vec<Scenario> {
    let name = format!("a / b ({})", T::DTYPE);
    vec![Scenario::new(name, "Divide", Suite::Arithmetic, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        let b = positive_array::<T>(rng, n);
        Box::new(move || {
            black_box(T::divide_arrays(&a, &b));
        })
    })]
}

fn binary<T: Element>(
    op: &str,
    category: &'static str,
    n: usize,
    f: fn(&Array1<T>, &Array1<T>) -> Array1<T>,
) -> Scenario {
    let name = format!("{op} ({})", T::DTYPE);
    Scenario::new(name, category, Suite::Arithmetic, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        let b = random_array::<T>(rng, n);
        Box::new(move || {
            black_box(f(&a, &b));
        })
    })
}

fn scalar<T: Element>(op: &str, category: &'static str, n: usize) -> Scenario {
    let name = format!("{op} ({})", T::DTYPE);
    Scenario::new(name, category, Suite::Arithmetic, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        let s = T::from_small(SCALAR);
        Box::new(move || {
            black_box(T::add_scalar(&a, s));
        })
    })
}

fn square<T: Element>(n: usize) -> Scenario {
    let name = format!("a * a ({})", T::DTYPE);
    Scenario::new(name, "Multiply", Suite::Arithmetic, T::DTYPE, n, move |rng| {
        let a = random_array::<T>(rng, n);
        Box::new(move || {
            black_box(T::square_array(&a));
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_only_for_floats() {
        let ints = scenarios(&[DType::Int32], 16);
        assert_eq!(ints.len(), 5);
        assert!(ints.iter().all(|s| !s.name().starts_with("a / b")));

        let floats = scenarios(&[DType::Float32], 16);
        assert_eq!(floats.len(), 6);
        assert!(floats.iter().any(|s| s.name() == "a / b (float32)"));
    }

    #[test]
    fn test_names_and_metadata() {
        let batch = scenarios(&[DType::Int64], 8);
        let names: Vec<&str> = batch.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["a + b (int64)", "a + scalar (int64)", "a - b (int64)", "a * b (int64)", "a * a (int64)"]
        );
        assert!(batch.iter().all(|s| s.suite() == Suite::Arithmetic && s.n() == 8));
        assert_eq!(batch[0].element_bytes(), 8);
    }

    #[test]
    fn test_bool_and_decimal_have_no_scenarios() {
        assert!(scenarios(&[DType::Bool, DType::Decimal], 8).is_empty());
    }
}
