//! Broadcasting over a square float64 matrix of side `sqrt(n)`.

use arraybench_core::DType;
use ndarray::Array2;
use rand::rngs::StdRng;
use std::hint::black_box;

use super::{square_side, Scenario, Suite};
use crate::element::{random_array, Element};

fn matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| f64::sample(rng))
}

/// Broadcasting scenarios.
pub fn scenarios(n: usize) -> Vec<Scenario> {
    let m = square_side(n);
    let size = m * m;
    let make = |name: &str, build: fn(&mut StdRng, usize) -> super::Workload| {
        Scenario::new(name, "Broadcast", Suite::Broadcasting, DType::Float64, size, move |rng| {
            build(rng, m)
        })
    };

    vec![
        make("matrix + matrix (N,M)+(N,M)", |rng, m| {
            let a = matrix(rng, m, m);
            let b = matrix(rng, m, m);
            Box::new(move || {
                black_box(&a + &b);
            })
        }),
        make("matrix + scalar", |rng, m| {
            let a = matrix(rng, m, m);
            Box::new(move || {
                black_box(&a + 42.0);
            })
        }),
        make("matrix + row_vector (N,M)+(M,)", |rng, m| {
            let a = matrix(rng, m, m);
            let row = random_array::<f64>(rng, m);
            Box::new(move || {
                black_box(&a + &row);
            })
        }),
        make("matrix + col_vector (N,M)+(N,1)", |rng, m| {
            let a = matrix(rng, m, m);
            let col = matrix(rng, m, 1);
            Box::new(move || {
                black_box(&a + &col);
            })
        }),
        make("np.broadcast_to(row, (N,M))", |rng, m| {
            let row = random_array::<f64>(rng, m);
            Box::new(move || {
                black_box(row.broadcast((m, m)).map(|view| view.to_owned()));
            })
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_scenarios_share_matrix_size() {
        let batch = scenarios(100);
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|s| s.n() == 100 && s.dtype() == DType::Float64));
    }

    #[test]
    fn test_row_and_column_broadcast_shapes() {
        let a = Array2::<f64>::zeros((3, 3));
        let row: Array1<f64> = array![1.0, 2.0, 3.0];
        let col = Array2::from_shape_vec((3, 1), vec![10.0, 20.0, 30.0]).unwrap();
        let by_row = &a + &row;
        let by_col = &a + &col;
        assert_eq!(by_row[[2, 1]], 2.0);
        assert_eq!(by_col[[2, 1]], 30.0);
    }

    #[test]
    fn test_all_run() {
        for scenario in scenarios(16) {
            let mut workload = scenario.instantiate(3);
            workload();
        }
    }
}
