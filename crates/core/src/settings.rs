// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Layered run settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `arraybench.toml` in the working directory, or an explicit file
//! 3. `ARRAYBENCH_*` environment variables (`ARRAYBENCH_ITERATIONS=20`)
//!
//! Command-line flags are applied on top by the caller.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::tiers::COMPARISON_SIZE;
use crate::{Error, Result};

/// Base name of the optional settings file.
pub const DEFAULT_CONFIG_FILE: &str = "arraybench";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ARRAYBENCH";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output.
    #[default]
    Pretty,
    /// Single-line human readable output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::invalid_input(format!("unknown log format: {other}"))),
        }
    }
}

/// Settings for harness runs and comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Discarded warmup calls per scenario.
    pub warmup: usize,
    /// Measured calls per scenario.
    pub iterations: usize,
    /// Measured calls per scenario in quick mode.
    pub quick_iterations: usize,
    /// Warmup calls per scenario in quick mode.
    pub quick_warmup: usize,
    /// Seed handed to every scenario constructor.
    pub seed: u64,
    /// Default element count for size-parameterized suites.
    pub n: usize,
    /// Only external records of this size take part in a comparison.
    pub comparison_n: usize,
    /// Directory for harness and comparison outputs.
    pub output_dir: PathBuf,
    /// Default tracing filter directive.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warmup: 10,
            iterations: 50,
            quick_iterations: 10,
            quick_warmup: 3,
            seed: 42,
            n: COMPARISON_SIZE,
            comparison_n: COMPARISON_SIZE,
            output_dir: PathBuf::from("benchmarks/output"),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    ///
    /// When `path` is given the file must exist; otherwise
    /// `arraybench.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("warmup", defaults.warmup as i64)?
            .set_default("iterations", defaults.iterations as i64)?
            .set_default("quick_iterations", defaults.quick_iterations as i64)?
            .set_default("quick_warmup", defaults.quick_warmup as i64)?
            .set_default("seed", defaults.seed as i64)?
            .set_default("n", defaults.n as i64)?
            .set_default("comparison_n", defaults.comparison_n as i64)?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("log_level", defaults.log_level.clone())?
            .set_default("log_format", "pretty")?;

        builder = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading settings file");
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::invalid_input("iterations must be at least 1"));
        }
        if self.quick_iterations == 0 {
            return Err(Error::invalid_input("quick_iterations must be at least 1"));
        }
        if self.n == 0 {
            return Err(Error::invalid_input("n must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.comparison_n, 10_000_000);
        assert_eq!(settings.seed, 42);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "iterations = 7").unwrap();
        writeln!(file, "log_format = \"json\"").unwrap();
        writeln!(file, "output_dir = \"out\"").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.iterations, 7);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.warmup, 10);
    }

    #[test]
    fn test_load_rejects_zero_iterations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(&path, "iterations = 0\n").unwrap();

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Settings::load(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
