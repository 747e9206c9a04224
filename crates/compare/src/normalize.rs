// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Operation name normalization.
//!
//! [`normalize_name`] repeatedly strips trailing parenthetical annotations
//! and surrounding quotes until nothing changes, then collapses whitespace,
//! lowercases and applies [`NAME_ALIASES`](crate::aliases::NAME_ALIASES).
//! An annotation must be preceded by whitespace, so call syntax such as
//! `np.sum(a, axis=0)` survives intact. The result is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::aliases::CanonicalOp;

static TRAILING_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\s+\([^()]*\))+\s*$").expect("annotation pattern is a valid regex")
});

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

fn strip_once(name: &str) -> String {
    let stripped = TRAILING_ANNOTATION.replace(name, "");
    stripped.trim().trim_matches(is_quote).trim().to_string()
}

/// Normalize a free-text operation name for matching.
pub fn normalize_name(name: &str) -> String {
    let mut current = name.trim().to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            break;
        }
        current = next;
    }

    let collapsed = current.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    match CanonicalOp::from_name_alias(&collapsed) {
        Some(op) => op.as_str().to_string(),
        None => collapsed,
    }
}

/// Operation string for an external record.
///
/// Known method identifiers map straight to their canonical operation;
/// anything else falls back to normalizing the title, or the method when
/// there is no title.
pub fn external_operation(method: &str, title: Option<&str>) -> String {
    match CanonicalOp::from_method(method.trim()) {
        Some(op) => op.as_str().to_string(),
        None => normalize_name(title.filter(|t| !t.trim().is_empty()).unwrap_or(method)),
    }
}
