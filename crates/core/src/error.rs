// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared across the workspace.

use thiserror::Error;

/// Errors raised by arraybench libraries.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied an argument outside its valid range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Build an [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for arraybench operations.
pub type Result<T> = std::result::Result<T, Error>;
