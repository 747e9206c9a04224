//! Terminal tables and summaries.

use arraybench_compare::{Status, StatusCounts, UnifiedResult};
use arraybench_harness::catalog::thresholds::Crossover;
use arraybench_harness::BenchmarkResult;
use colored::{ColoredString, Colorize};

const NAME_WIDTH: usize = 40;

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let kept: String = name.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// One console row for a harness result.
pub(crate) fn result_row(result: &BenchmarkResult) -> String {
    let speedup = result
        .speedup_vs_baseline
        .map(|s| format!("{s:.2}x"))
        .unwrap_or_default();
    format!(
        "{:<NAME_WIDTH$} {:>8} {:>10} {:>12.4} {:>10.4} {:>8.2} {:>8}",
        truncate(&result.operation, NAME_WIDTH),
        result.dtype,
        result.n,
        result.mean_ms,
        result.stddev_ms,
        result.throughput / 1e9,
        speedup,
    )
}

/// Print the harness results grouped under their suite.
pub(crate) fn print_results(results: &[BenchmarkResult]) {
    let header = format!(
        "{:<NAME_WIDTH$} {:>8} {:>10} {:>12} {:>10} {:>8} {:>8}",
        "Operation", "DType", "N", "Mean (ms)", "Std (ms)", "GB/s", "Speedup"
    );

    let mut current_suite: Option<&str> = None;
    for result in results {
        if current_suite != Some(result.suite.as_str()) {
            current_suite = Some(result.suite.as_str());
            println!();
            println!("{}", result.suite.bold());
            println!("{}", header.dimmed());
        }
        println!("{}", result_row(result));
    }
    println!();
}

/// One line per crossover, or a note when the prealloc path never wins.
pub(crate) fn crossover_line(crossover: &Crossover) -> String {
    match (crossover.n, crossover.speedup) {
        (Some(n), Some(speedup)) => format!("{:<8} out=c wins from N={n} ({speedup:.2}x)", crossover.dtype),
        _ => format!("{:<8} no crossover in sweep", crossover.dtype),
    }
}

/// Print crossover points found in the size sweep.
pub(crate) fn print_crossovers(crossovers: &[Crossover]) {
    if crossovers.is_empty() {
        return;
    }
    println!("{}", "Crossover points".bold());
    for crossover in crossovers {
        println!("  {}", crossover_line(crossover));
    }
    println!();
}

fn colored_status(status: Status, text: String) -> ColoredString {
    match status {
        Status::Faster => text.green(),
        Status::Close => text.yellow(),
        Status::Slower => text.truecolor(255, 165, 0),
        Status::MuchSlower => text.red(),
        Status::NoData => text.dimmed(),
    }
}

/// Colored status-count line, e.g. `4 ops | ✅ faster 1 | ...`.
pub(crate) fn status_line(counts: &StatusCounts) -> String {
    let mut line = format!("{} ops", counts.total());
    for &status in Status::ALL {
        let part = format!("{} {} {}", status.icon(), status.as_str(), counts.get(status));
        line.push_str(" | ");
        line.push_str(&colored_status(status, part).to_string());
    }
    line
}

/// Print the comparison summary and the slowest matched operations.
pub(crate) fn print_comparison(unified: &[UnifiedResult]) {
    let counts = StatusCounts::tally(unified);
    println!("{} {}", "Summary:".bold(), status_line(&counts));

    let (_, worst) = arraybench_compare::report::markdown::best_and_worst(unified);
    let flagged: Vec<&&UnifiedResult> = worst
        .iter()
        .filter(|r| matches!(r.status(), Status::Slower | Status::MuchSlower))
        .take(5)
        .collect();
    if !flagged.is_empty() {
        println!("{}", "Slowest:".bold());
        for result in flagged {
            let ratio = result.ratio().map(|r| format!("{r:.2}x")).unwrap_or_default();
            println!(
                "  {} {} [{}] {}",
                result.status().icon(),
                result.operation(),
                result.dtype(),
                colored_status(result.status(), ratio)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arraybench_harness::Summary;

    fn result(name: &str, speedup: Option<f64>) -> BenchmarkResult {
        let summary = Summary {
            mean_ms: 1.5,
            stddev_ms: 0.25,
            min_ms: 1.0,
            max_ms: 2.0,
            iterations: 10,
        };
        let result = BenchmarkResult::new(name, "Add", "Arithmetic", "int32", 1000, &summary).with_throughput(2.5e9);
        match speedup {
            Some(s) => result.with_speedup(s),
            None => result,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 5), "abcd…");
    }

    #[test]
    fn test_result_row() {
        let row = result_row(&result("a + b (int32)", Some(1.25)));
        assert!(row.starts_with("a + b (int32)"));
        assert!(row.contains("1.5000"));
        assert!(row.contains("2.50"));
        assert!(row.trim_end().ends_with("1.25x"));

        let row = result_row(&result("a + b (int32)", None));
        assert!(!row.contains('x'));
    }

    #[test]
    fn test_crossover_line() {
        let found = Crossover {
            dtype: "int32".to_string(),
            n: Some(4096),
            speedup: Some(1.1),
        };
        assert!(crossover_line(&found).contains("N=4096 (1.10x)"));

        let missing = Crossover {
            dtype: "float64".to_string(),
            n: None,
            speedup: None,
        };
        assert!(crossover_line(&missing).contains("no crossover"));
    }

    #[test]
    fn test_status_line() {
        colored::control::set_override(false);
        let counts = StatusCounts {
            faster: 2,
            close: 1,
            slower: 0,
            much_slower: 1,
            no_data: 3,
        };
        assert_eq!(
            status_line(&counts),
            "7 ops | ✅ faster 2 | 🟡 close 1 | 🟠 slower 0 | 🔴 much_slower 1 | ⚪ no_data 3"
        );
    }
}
