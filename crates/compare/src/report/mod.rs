// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Comparison reports.
//!
//! Every renderer is a pure transform over the unified list: no further
//! matching, and output order follows input order except where a section
//! explicitly ranks by ratio.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::status::Status;
use crate::unified::UnifiedResult;

pub mod csv;
pub mod json;
pub mod markdown;

/// Which report files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// JSON, CSV and Markdown.
    #[default]
    All,
    /// `<base>.json` only.
    Json,
    /// `<base>.csv` only.
    Csv,
    /// `<base>.md` only.
    Markdown,
}

impl ReportFormat {
    fn includes(self, other: ReportFormat) -> bool {
        self == ReportFormat::All || self == other
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> ReportResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ReportFormat::All),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Number of results in each status band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    /// `faster`
    pub faster: usize,
    /// `close`
    pub close: usize,
    /// `slower`
    pub slower: usize,
    /// `much_slower`
    pub much_slower: usize,
    /// `no_data`
    pub no_data: usize,
}

impl StatusCounts {
    /// Count statuses in `results`.
    pub fn tally(results: &[UnifiedResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result.status() {
                Status::Faster => counts.faster += 1,
                Status::Close => counts.close += 1,
                Status::Slower => counts.slower += 1,
                Status::MuchSlower => counts.much_slower += 1,
                Status::NoData => counts.no_data += 1,
            }
        }
        counts
    }

    /// Count for one status.
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Faster => self.faster,
            Status::Close => self.close,
            Status::Slower => self.slower,
            Status::MuchSlower => self.much_slower,
            Status::NoData => self.no_data,
        }
    }

    /// Sum over all bands.
    pub fn total(&self) -> usize {
        self.faster + self.close + self.slower + self.much_slower + self.no_data
    }
}

fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Write the selected reports next to `base` (`<base>.json`, `<base>.csv`,
/// `<base>.md`), creating parent directories. Returns the written paths.
pub fn write_reports(results: &[UnifiedResult], base: &Path, format: ReportFormat) -> ReportResult<Vec<PathBuf>> {
    if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut written = Vec::new();
    if format.includes(ReportFormat::Json) {
        let path = with_extension(base, "json");
        json::write_json(results, &path)?;
        written.push(path);
    }
    if format.includes(ReportFormat::Csv) {
        let path = with_extension(base, "csv");
        csv::write_csv_file(results, &path)?;
        written.push(path);
    }
    if format.includes(ReportFormat::Markdown) {
        let path = with_extension(base, "md");
        std::fs::write(&path, markdown::generate_report(results))?;
        written.push(path);
    }

    for path in &written {
        info!(path = %path.display(), "wrote report");
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("ALL".parse::<ReportFormat>().unwrap(), ReportFormat::All);
        assert!(matches!("xml".parse::<ReportFormat>(), Err(ReportError::UnknownFormat(_))));
    }

    #[test]
    fn test_with_extension_keeps_dots_in_base() {
        assert_eq!(
            with_extension(Path::new("out/report.v2"), "csv"),
            PathBuf::from("out/report.v2.csv")
        );
    }

    #[test]
    fn test_write_reports_selected_format() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("sub").join("benchmark-report");
        let written = write_reports(&[], &base, ReportFormat::Csv).unwrap();
        assert_eq!(written, vec![dir.path().join("sub").join("benchmark-report.csv")]);
        assert!(!dir.path().join("sub").join("benchmark-report.json").exists());
    }

    #[test]
    fn test_write_reports_all() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("report");
        let written = write_reports(&[], &base, ReportFormat::All).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));
    }
}
