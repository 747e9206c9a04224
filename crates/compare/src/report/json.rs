// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lossless JSON records.

use std::fs;
use std::path::Path;

use crate::error::ReportResult;
use crate::unified::UnifiedResult;

/// Pretty-printed JSON array of unified records.
pub fn to_json_string(results: &[UnifiedResult]) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Write [`to_json_string`] to `path`.
pub fn write_json(results: &[UnifiedResult], path: &Path) -> ReportResult<()> {
    fs::write(path, to_json_string(results)?)?;
    Ok(())
}

/// Read a unified JSON report, re-checking every record's invariants.
pub fn read_unified_json(path: &Path) -> ReportResult<Vec<UnifiedResult>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
