// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Joins harness results with BenchmarkDotNet artifacts.
//!
//! The baseline side is the harness JSON; the candidate side is one or more
//! BenchmarkDotNet report files. Both sides are reduced to a
//! [`MatchKey`] of normalized operation and canonical dtype, joined, and
//! classified by the ratio candidate / baseline.
//!
//! # Modules
//!
//! - [`aliases`] - closed tables from source identifiers to canonical ops
//! - [`normalize`] - free-text name normalization
//! - [`artifact`] - BenchmarkDotNet parsing and discovery
//! - [`source`] - the two input seams
//! - [`matcher`] - the candidate index and merge
//! - [`unified`] - the joined record
//! - [`status`] - ratio bands
//! - [`report`] - JSON, CSV and Markdown output

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod aliases;
pub mod artifact;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod source;
pub mod status;
pub mod unified;

pub use aliases::CanonicalOp;
pub use artifact::CandidateResult;
pub use error::{ArtifactError, ReportError, ReportResult};
pub use matcher::{merge, CandidateIndex, MatchKey};
pub use normalize::normalize_name;
pub use report::{write_reports, ReportFormat, StatusCounts};
pub use source::{ArtifactSource, BaselineSource, CandidateSource, HarnessFile};
pub use status::Status;
pub use unified::{Outcome, UnifiedResult};

use tracing::info;

/// Load both sides and join them.
///
/// Produces exactly one [`UnifiedResult`] per baseline result, in baseline
/// order.
pub fn compare(baseline: &dyn BaselineSource, candidates: &dyn CandidateSource) -> Vec<UnifiedResult> {
    let baseline = baseline.load_baseline();
    let index = CandidateIndex::build(candidates.load_candidates());
    info!(baseline = baseline.len(), candidates = index.len(), "merging results");

    let unified = merge(&baseline, &index);
    let counts = StatusCounts::tally(&unified);
    info!(
        total = counts.total(),
        faster = counts.faster,
        close = counts.close,
        slower = counts.slower,
        much_slower = counts.much_slower,
        no_data = counts.no_data,
        "comparison complete"
    );
    unified
}
