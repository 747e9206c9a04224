//! Sequential scenario execution.

use std::collections::HashMap;

use arraybench_core::Result;
use tracing::{debug, info};

use crate::catalog::Scenario;
use crate::result::BenchmarkResult;
use crate::timing::{measure, throughput, Timing};

/// Time a single scenario.
///
/// Inputs are built from `seed` immediately before timing and dropped
/// when this returns.
pub fn run_scenario(scenario: &Scenario, timing: &Timing, seed: u64) -> Result<BenchmarkResult> {
    let mut workload = scenario.instantiate(seed);
    let summary = measure(timing, || workload())?;
    let bytes_per_sec = throughput(scenario.n(), scenario.element_bytes(), summary.mean_ms / 1000.0);

    Ok(BenchmarkResult::new(
        scenario.name(),
        scenario.category(),
        scenario.suite().name(),
        scenario.dtype().name(),
        scenario.n(),
        &summary,
    )
    .with_throughput(bytes_per_sec))
}

/// Time every scenario in order.
///
/// `observe` is called after each scenario with its result, outside any
/// timed region. Scenarios with a reference get `speedup_vs_baseline` when
/// the reference ran earlier at the same size.
pub fn run_scenarios<F>(
    scenarios: &[Scenario],
    timing: &Timing,
    seed: u64,
    mut observe: F,
) -> Result<Vec<BenchmarkResult>>
where
    F: FnMut(&BenchmarkResult),
{
    let mut results = Vec::with_capacity(scenarios.len());
    let mut means: HashMap<(String, usize), f64> = HashMap::new();

    info!(
        count = scenarios.len(),
        warmup = timing.warmup(),
        iterations = timing.iterations(),
        seed,
        "running scenarios"
    );

    for scenario in scenarios {
        let mut result = run_scenario(scenario, timing, seed)?;

        if let Some(reference) = scenario.reference() {
            match means.get(&(reference.to_string(), scenario.n())) {
                Some(&reference_ms) if result.mean_ms > 0.0 => {
                    let speedup = reference_ms / result.mean_ms;
                    result = result.with_speedup(speedup);
                }
                _ => debug!(scenario = scenario.name(), reference, "no reference timing"),
            }
        }

        info!(
            scenario = scenario.name(),
            mean_ms = result.mean_ms,
            stddev_ms = result.stddev_ms,
            "scenario complete"
        );
        means.insert((scenario.name().to_string(), scenario.n()), result.mean_ms);
        observe(&result);
        results.push(result);
    }

    Ok(results)
}
