// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by every arraybench crate.
//!
//! This crate holds the pieces both sides of a comparison must agree on:
//!
//! - [`dtype`] - canonical element types and the type sets used by the catalog
//! - [`tiers`] - named array-size tiers and the threshold sweep
//! - [`settings`] - layered run configuration
//! - [`error`] - the shared error type

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod dtype;
pub mod error;
pub mod settings;
pub mod tiers;

pub use dtype::{canonical_dtype, DType, TypeSet};
pub use error::{Error, Result};
pub use settings::{LogFormat, Settings};
pub use tiers::{SizeTier, COMPARISON_SIZE};
