// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Delimited table output.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::ReportResult;
use crate::unified::UnifiedResult;

/// Column headers, in order.
pub const HEADER: [&str; 9] = [
    "Operation",
    "Suite",
    "Category",
    "DType",
    "N",
    "Baseline (ms)",
    "Candidate (ms)",
    "Ratio",
    "Status",
];

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map(|v| format!("{v:.precision$}")).unwrap_or_default()
}

/// Write the CSV table to `writer`. Times use 3 decimals and ratios 2;
/// absent values are empty cells.
pub fn write_csv<W: io::Write>(results: &[UnifiedResult], writer: W) -> ReportResult<()> {
    let mut writer = ::csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for result in results {
        writer.write_record([
            result.operation().to_string(),
            result.suite().to_string(),
            result.category().to_string(),
            result.dtype().to_string(),
            result.n().to_string(),
            format!("{:.3}", result.baseline_ms()),
            optional(result.candidate_ms(), 3),
            optional(result.ratio(), 2),
            result.status().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the CSV table to `path`.
pub fn write_csv_file(results: &[UnifiedResult], path: &Path) -> ReportResult<()> {
    write_csv(results, File::create(path)?)
}
