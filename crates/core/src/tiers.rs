// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Array size tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named array sizes, each targeting a different memory regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    /// One element; pure call overhead.
    Scalar,
    /// Small collections.
    Tiny,
    /// Fits in L1.
    Small,
    /// Fits in L2/L3.
    Medium,
    /// Memory-bound.
    Large,
}

impl SizeTier {
    /// All tiers, smallest first.
    pub const ALL: &'static [SizeTier] = &[
        SizeTier::Scalar,
        SizeTier::Tiny,
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
    ];

    /// Element count for this tier.
    pub const fn elements(self) -> usize {
        match self {
            SizeTier::Scalar => 1,
            SizeTier::Tiny => 100,
            SizeTier::Small => 1_000,
            SizeTier::Medium => 100_000,
            SizeTier::Large => 10_000_000,
        }
    }

    /// Lowercase tier name.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Scalar => "scalar",
            SizeTier::Tiny => "tiny",
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SizeTier {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        SizeTier::ALL
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::invalid_input(format!("unknown size tier: {s}")))
    }
}

/// Size used for cross-implementation comparison and as the default
/// element count when an external record carries none.
pub const COMPARISON_SIZE: usize = SizeTier::Large.elements();

/// Sizes swept when looking for small-array/large-array crossover points:
/// powers of two from 8 through 131072.
pub fn threshold_sizes() -> Vec<usize> {
    (3..=17).map(|exp| 1usize << exp).collect()
}

/// Reduced sweep used in quick mode.
pub fn quick_threshold_sizes() -> Vec<usize> {
    threshold_sizes()
        .into_iter()
        .filter(|&n| (32..=1024).contains(&n) || n >= 16_384)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_elements() {
        assert_eq!(SizeTier::Scalar.elements(), 1);
        assert_eq!(SizeTier::Medium.elements(), 100_000);
        assert_eq!(COMPARISON_SIZE, 10_000_000);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("large".parse::<SizeTier>().unwrap(), SizeTier::Large);
        assert_eq!("Small".parse::<SizeTier>().unwrap(), SizeTier::Small);
        assert!("huge".parse::<SizeTier>().is_err());
    }

    #[test]
    fn test_threshold_sweep_bounds() {
        let sizes = threshold_sizes();
        assert_eq!(sizes.first(), Some(&8));
        assert_eq!(sizes.last(), Some(&131_072));
        assert_eq!(sizes.len(), 15);
        assert!(sizes.windows(2).all(|w| w[1] == w[0] * 2));
    }

    #[test]
    fn test_quick_sweep_is_a_subset() {
        let all = threshold_sizes();
        let quick = quick_threshold_sizes();
        assert!(quick.iter().all(|n| all.contains(n)));
        assert!(!quick.contains(&8));
        assert!(quick.contains(&131_072));
    }
}
