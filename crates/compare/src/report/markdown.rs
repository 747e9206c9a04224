// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown comparison document.

use std::fmt::{self, Write};

use super::StatusCounts;
use crate::status::Status;
use crate::unified::UnifiedResult;

/// Rows shown in each of the best and worst tables.
pub const RANKED_ROWS: usize = 15;

/// Baseline times below this are too small to rank.
pub const MIN_RANKED_BASELINE_MS: f64 = 0.001;

/// Suite heading used for results without a suite.
pub const DEFAULT_SUITE: &str = "General";

const TABLE_HEADER: &str = "| | Operation | Type | Baseline (ms) | Candidate (ms) | Ratio |";
const TABLE_RULE: &str = "|:-:|-----------|:----:|------:|---------:|------:|";

/// Results eligible for ranking, sorted by ratio, ties in input order.
pub fn ranked(results: &[UnifiedResult]) -> Vec<&UnifiedResult> {
    let mut eligible: Vec<&UnifiedResult> = results
        .iter()
        .filter(|r| r.ratio().is_some() && r.baseline_ms() >= MIN_RANKED_BASELINE_MS)
        .collect();
    eligible.sort_by(|a, b| {
        let (a, b) = (a.ratio().unwrap_or(f64::INFINITY), b.ratio().unwrap_or(f64::INFINITY));
        a.total_cmp(&b)
    });
    eligible
}

/// The lowest-ratio and highest-ratio results, at most [`RANKED_ROWS`]
/// each. Worst is ordered worst first.
pub fn best_and_worst(results: &[UnifiedResult]) -> (Vec<&UnifiedResult>, Vec<&UnifiedResult>) {
    let ranked = ranked(results);
    let best = ranked.iter().take(RANKED_ROWS).copied().collect();
    let worst = ranked.iter().rev().take(RANKED_ROWS).copied().collect();
    (best, worst)
}

/// Results grouped by suite in first-seen order.
pub fn group_by_suite(results: &[UnifiedResult]) -> Vec<(&str, Vec<&UnifiedResult>)> {
    let mut groups: Vec<(&str, Vec<&UnifiedResult>)> = Vec::new();
    for result in results {
        let suite = if result.suite().is_empty() { DEFAULT_SUITE } else { result.suite() };
        match groups.iter_mut().find(|(name, _)| *name == suite) {
            Some((_, members)) => members.push(result),
            None => groups.push((suite, vec![result])),
        }
    }
    groups
}

fn optional(value: Option<f64>, precision: usize, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v:.precision$}{suffix}"),
        None => "-".to_string(),
    }
}

fn write_row(output: &mut String, result: &UnifiedResult) -> fmt::Result {
    writeln!(
        output,
        "|{}| {} | {} | {:.3} | {} | {} |",
        result.status().icon(),
        result.operation(),
        result.dtype(),
        result.baseline_ms(),
        optional(result.candidate_ms(), 3, ""),
        optional(result.ratio(), 2, "x"),
    )
}

fn write_table<'a>(
    output: &mut String,
    heading: &str,
    rows: impl IntoIterator<Item = &'a UnifiedResult>,
) -> fmt::Result {
    writeln!(output, "### {heading}")?;
    writeln!(output)?;
    writeln!(output, "{TABLE_HEADER}")?;
    writeln!(output, "{TABLE_RULE}")?;
    for row in rows {
        write_row(output, row)?;
    }
    writeln!(output)
}

fn write_report(output: &mut String, results: &[UnifiedResult]) -> fmt::Result {
    let counts = StatusCounts::tally(results);

    writeln!(output, "# Performance Comparison")?;
    writeln!(output)?;
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(output)?;
    writeln!(output, "**Ratio** = Candidate ÷ Baseline → lower is better for the candidate")?;
    writeln!(output)?;
    writeln!(output, "| | Status | Ratio | Meaning |")?;
    writeln!(output, "|:-:|--------|:-----:|---------|")?;
    writeln!(output, "|{}| {} | ≤1.0 | Candidate matches or beats the baseline |", Status::Faster.icon(), Status::Faster.label())?;
    writeln!(output, "|{}| {} | 1-2x | Acceptable parity |", Status::Close.icon(), Status::Close.label())?;
    writeln!(output, "|{}| {} | 2-5x | Optimization target |", Status::Slower.icon(), Status::Slower.label())?;
    writeln!(output, "|{}| {} | >5x | Priority fix |", Status::MuchSlower.icon(), Status::MuchSlower.label())?;
    writeln!(output, "|{}| {} | - | No candidate measurement |", Status::NoData.icon(), Status::NoData.label())?;
    writeln!(output)?;
    writeln!(output, "---")?;
    writeln!(output)?;

    write!(output, "**Summary:** {} ops", counts.total())?;
    for status in Status::ALL {
        write!(output, " | {} {}", status.icon(), counts.get(*status))?;
    }
    writeln!(output)?;
    writeln!(output)?;

    let (best, worst) = best_and_worst(results);
    if !best.is_empty() {
        write_table(output, &format!("Top {RANKED_ROWS} Best"), best)?;
        write_table(output, &format!("Top {RANKED_ROWS} Worst"), worst)?;
        writeln!(output, "---")?;
        writeln!(output)?;
    }

    for (suite, members) in group_by_suite(results) {
        write_table(output, suite, members)?;
    }
    Ok(())
}

/// Render the full Markdown document.
pub fn generate_report(results: &[UnifiedResult]) -> String {
    let mut output = String::new();
    write_report(&mut output, results).expect("writing to String");
    output
}
