// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for artifact parsing and report output.

use thiserror::Error;

/// Why a single external benchmark record was rejected.
///
/// Rejections are logged and the record is dropped; they never abort a
/// comparison.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Neither `Method` nor `MethodTitle` is present.
    #[error("record has no Method or MethodTitle")]
    MissingMethod,

    /// `Statistics.Mean` is absent.
    #[error("record has no Statistics.Mean")]
    MissingMean,

    /// Mean is negative or not finite.
    #[error("invalid mean: {0} ns")]
    InvalidMean(f64),

    /// A `Parameters` entry could not be parsed.
    #[error("invalid parameter {key}={value}")]
    InvalidParameter {
        /// Parameter name.
        key: &'static str,
        /// Raw value.
        value: String,
    },

    /// The entry does not have the expected shape.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised while writing or reading comparison reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Unrecognized `--format` value.
    #[error("unknown report format: {0}")]
    UnknownFormat(String),
}

/// Result type for report operations.
pub type ReportResult<T> = std::result::Result<T, ReportError>;
