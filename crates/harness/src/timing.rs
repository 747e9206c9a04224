//! Wall-clock measurement of a single workload.

use arraybench_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Bytes moved per element for a binary op: two reads and one write.
pub const READ_WRITE_FACTOR: usize = 3;

/// Warmup and measured call counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    warmup: usize,
    iterations: usize,
}

impl Timing {
    /// Create a timing plan. `iterations` must be at least one.
    pub fn new(warmup: usize, iterations: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::invalid_input("iterations must be at least 1"));
        }
        Ok(Self { warmup, iterations })
    }

    /// Discarded calls before sampling.
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Sampled calls.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Statistics over a set of samples, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean_ms: f64,
    /// Population standard deviation.
    pub stddev_ms: f64,
    /// Fastest sample.
    pub min_ms: f64,
    /// Slowest sample.
    pub max_ms: f64,
    /// Number of samples.
    pub iterations: usize,
}

impl Summary {
    /// Summarize raw samples.
    pub fn from_samples(samples: &[Duration]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::invalid_input("cannot summarize zero samples"));
        }

        let ms: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        let count = ms.len() as f64;
        let mean = ms.iter().sum::<f64>() / count;
        let variance = ms.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count;
        let min = ms.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            mean_ms: mean,
            stddev_ms: variance.sqrt(),
            min_ms: min,
            max_ms: max,
            iterations: ms.len(),
        })
    }
}

/// Run `op` `warmup` times untimed, then `iterations` times timed.
///
/// Every return value passes through [`black_box`] so the call cannot be
/// elided.
pub fn measure<F, R>(timing: &Timing, mut op: F) -> Result<Summary>
where
    F: FnMut() -> R,
{
    for _ in 0..timing.warmup {
        black_box(op());
    }

    let mut samples = Vec::with_capacity(timing.iterations);
    for _ in 0..timing.iterations {
        let start = Instant::now();
        black_box(op());
        samples.push(start.elapsed());
    }

    Summary::from_samples(&samples)
}

/// Bytes per second for a pass over `elements` items of `element_bytes`
/// each, assuming [`READ_WRITE_FACTOR`] bytes moved per element byte.
///
/// Returns 0 when `elapsed_secs` is not positive.
pub fn throughput(elements: usize, element_bytes: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
        return 0.0;
    }
    (elements * element_bytes * READ_WRITE_FACTOR) as f64 / elapsed_secs
}
