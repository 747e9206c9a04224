//! Markdown output generation for harness runs.

use crate::catalog::thresholds::crossover_points;
use crate::result::BenchmarkResult;
use std::fmt::{self, Write};

/// Generate a markdown summary from benchmark results.
pub fn generate_summary(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();
    write_summary(&mut output, results).expect("writing to String");
    output
}

fn write_summary(output: &mut String, results: &[BenchmarkResult]) -> fmt::Result {
    writeln!(output, "# Benchmark Summary")?;
    writeln!(output)?;
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(output)?;
    writeln!(output, "## Results")?;
    writeln!(output)?;
    writeln!(output, "| Operation | Suite | DType | N | Mean (ms) | StdDev (ms) | Min (ms) | Max (ms) | GB/s |")?;
    writeln!(output, "|-----------|-------|-------|---|-----------|-------------|----------|----------|------|")?;

    for result in results {
        writeln!(
            output,
            "| {} | {} | {} | {} | {:.4} | {:.4} | {:.4} | {:.4} | {:.2} |",
            result.operation,
            result.suite,
            result.dtype,
            result.n,
            result.mean_ms,
            result.stddev_ms,
            result.min_ms,
            result.max_ms,
            result.throughput / 1e9,
        )?;
    }

    let crossovers = crossover_points(results);
    if !crossovers.is_empty() {
        writeln!(output)?;
        writeln!(output, "## Crossover Points")?;
        writeln!(output)?;
        writeln!(output, "| DType | N | Speedup |")?;
        writeln!(output, "|-------|---|---------|")?;
        for point in &crossovers {
            match (point.n, point.speedup) {
                (Some(n), Some(speedup)) => writeln!(output, "| {} | {} | {:.2}x |", point.dtype, n, speedup)?,
                _ => writeln!(output, "| {} | none | - |", point.dtype)?,
            }
        }
    }

    writeln!(output)?;
    writeln!(output, "---")?;
    writeln!(output, "Total benchmarks: {}", results.len())?;
    Ok(())
}
