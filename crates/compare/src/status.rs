// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ratio classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the `faster` band.
pub const FASTER_MAX: f64 = 1.0;
/// Upper bound (inclusive) of the `close` band.
pub const CLOSE_MAX: f64 = 2.0;
/// Upper bound (inclusive) of the `slower` band.
pub const SLOWER_MAX: f64 = 5.0;

/// How the candidate compares with the baseline for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Ratio at most 1.0.
    Faster,
    /// Ratio in (1.0, 2.0].
    Close,
    /// Ratio in (2.0, 5.0].
    Slower,
    /// Ratio above 5.0.
    MuchSlower,
    /// No ratio.
    NoData,
}

impl Status {
    /// Every status, best first.
    pub const ALL: &'static [Status] = &[
        Status::Faster,
        Status::Close,
        Status::Slower,
        Status::MuchSlower,
        Status::NoData,
    ];

    /// Classify a ratio of candidate time over baseline time.
    pub fn from_ratio(ratio: Option<f64>) -> Self {
        match ratio {
            None => Status::NoData,
            Some(r) if r <= FASTER_MAX => Status::Faster,
            Some(r) if r <= CLOSE_MAX => Status::Close,
            Some(r) if r <= SLOWER_MAX => Status::Slower,
            Some(_) => Status::MuchSlower,
        }
    }

    /// Serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Faster => "faster",
            Status::Close => "close",
            Status::Slower => "slower",
            Status::MuchSlower => "much_slower",
            Status::NoData => "no_data",
        }
    }

    /// Markdown icon.
    pub fn icon(self) -> &'static str {
        match self {
            Status::Faster => "✅",
            Status::Close => "🟡",
            Status::Slower => "🟠",
            Status::MuchSlower => "🔴",
            Status::NoData => "⚪",
        }
    }

    /// Short human label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Faster => "Faster",
            Status::Close => "Close",
            Status::Slower => "Slower",
            Status::MuchSlower => "Much slower",
            Status::NoData => "No data",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Status::from_ratio(None), Status::NoData);
        assert_eq!(Status::from_ratio(Some(0.0)), Status::Faster);
        assert_eq!(Status::from_ratio(Some(1.0)), Status::Faster);
        assert_eq!(Status::from_ratio(Some(1.0000001)), Status::Close);
        assert_eq!(Status::from_ratio(Some(2.0)), Status::Close);
        assert_eq!(Status::from_ratio(Some(2.0000001)), Status::Slower);
        assert_eq!(Status::from_ratio(Some(5.0)), Status::Slower);
        assert_eq!(Status::from_ratio(Some(5.0000001)), Status::MuchSlower);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Status::MuchSlower).unwrap(), "\"much_slower\"");
        assert_eq!(serde_json::from_str::<Status>("\"no_data\"").unwrap(), Status::NoData);
        for status in Status::ALL {
            assert_eq!(serde_json::to_value(status).unwrap(), status.as_str());
        }
    }

    fn rank(status: Status) -> usize {
        Status::ALL.iter().position(|s| *s == status).unwrap()
    }

    proptest! {
        #[test]
        fn test_classification_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(Status::from_ratio(Some(lo))) <= rank(Status::from_ratio(Some(hi))));
        }

        #[test]
        fn test_some_ratio_never_no_data(r in 0.0f64..1e9) {
            prop_assert_ne!(Status::from_ratio(Some(r)), Status::NoData);
        }
    }
}
