// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Canonical element types.
//!
//! Both result producers name element types differently (`Single` versus
//! `float32`, `Byte` versus `uint8`). Every type name that enters a join key
//! goes through [`canonical_dtype`], which resolves known aliases through
//! [`DTYPE_ALIASES`] and passes unknown names through lowercased.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric element type with a canonical lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    /// Boolean, one byte per element.
    Bool,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// IEEE 754 single precision.
    Float32,
    /// IEEE 754 double precision.
    Float64,
    /// 128-bit decimal. Only ever seen on the external side.
    Decimal,
}

/// Source type names mapped to their canonical type.
///
/// Lookups are case-insensitive. Canonical names map to themselves so the
/// function is idempotent on its own output.
pub const DTYPE_ALIASES: &[(&str, DType)] = &[
    ("bool", DType::Bool),
    ("boolean", DType::Bool),
    ("uint8", DType::UInt8),
    ("byte", DType::UInt8),
    ("int16", DType::Int16),
    ("short", DType::Int16),
    ("uint16", DType::UInt16),
    ("ushort", DType::UInt16),
    ("int32", DType::Int32),
    ("int", DType::Int32),
    ("uint32", DType::UInt32),
    ("uint", DType::UInt32),
    ("int64", DType::Int64),
    ("long", DType::Int64),
    ("uint64", DType::UInt64),
    ("ulong", DType::UInt64),
    ("float32", DType::Float32),
    ("single", DType::Float32),
    ("float64", DType::Float64),
    ("double", DType::Float64),
    ("decimal", DType::Decimal),
];

impl DType {
    /// Every known type, in width order.
    pub const ALL: &'static [DType] = &[
        DType::Bool,
        DType::UInt8,
        DType::Int16,
        DType::UInt16,
        DType::Int32,
        DType::UInt32,
        DType::Int64,
        DType::UInt64,
        DType::Float32,
        DType::Float64,
        DType::Decimal,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::UInt8 => "uint8",
            DType::Int16 => "int16",
            DType::UInt16 => "uint16",
            DType::Int32 => "int32",
            DType::UInt32 => "uint32",
            DType::Int64 => "int64",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Decimal => "decimal",
        }
    }

    /// Bytes per element.
    pub fn element_bytes(self) -> usize {
        match self {
            DType::Bool | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 => 8,
            DType::Decimal => 16,
        }
    }

    /// Whether the type is a binary floating point type.
    pub fn is_float(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// Resolve a source type name through [`DTYPE_ALIASES`].
    pub fn from_alias(name: &str) -> Option<DType> {
        let name = name.trim();
        DTYPE_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, dtype)| *dtype)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        DType::from_alias(s).ok_or_else(|| crate::Error::invalid_input(format!("unknown dtype: {s}")))
    }
}

/// Canonical type name used as half of a join key.
///
/// Unknown names are passed through trimmed and lowercased so a new type
/// degrades to "unmatched" instead of failing the run.
pub fn canonical_dtype(name: &str) -> String {
    match DType::from_alias(name) {
        Some(dtype) => dtype.name().to_string(),
        None => name.trim().to_lowercase(),
    }
}

/// Named groups of types the scenario catalog iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSet {
    /// Every type the harness can allocate.
    All,
    /// Types that support arithmetic (everything except `bool`).
    Arithmetic,
    /// The reduced set used by quick runs and creation benchmarks.
    Common,
    /// Floating types, used for transcendental functions.
    Transcendental,
}

impl TypeSet {
    /// All sets, widest first.
    pub const ALL: &'static [TypeSet] = &[
        TypeSet::All,
        TypeSet::Arithmetic,
        TypeSet::Common,
        TypeSet::Transcendental,
    ];

    /// Lowercase set name.
    pub fn name(self) -> &'static str {
        match self {
            TypeSet::All => "all",
            TypeSet::Arithmetic => "arithmetic",
            TypeSet::Common => "common",
            TypeSet::Transcendental => "transcendental",
        }
    }

    /// Types in this set.
    pub fn dtypes(self) -> &'static [DType] {
        match self {
            TypeSet::All => &[
                DType::Bool,
                DType::UInt8,
                DType::Int16,
                DType::UInt16,
                DType::Int32,
                DType::UInt32,
                DType::Int64,
                DType::UInt64,
                DType::Float32,
                DType::Float64,
            ],
            TypeSet::Arithmetic => &[
                DType::UInt8,
                DType::Int16,
                DType::UInt16,
                DType::Int32,
                DType::UInt32,
                DType::Int64,
                DType::UInt64,
                DType::Float32,
                DType::Float64,
            ],
            TypeSet::Common => &[DType::Int32, DType::Int64, DType::Float32, DType::Float64],
            TypeSet::Transcendental => &[DType::Float32, DType::Float64],
        }
    }

    /// Whether `dtype` belongs to this set.
    pub fn contains(self, dtype: DType) -> bool {
        self.dtypes().contains(&dtype)
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TypeSet {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        TypeSet::ALL
            .iter()
            .copied()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::invalid_input(format!("unknown type set: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_aliases_resolve() {
        assert_eq!(canonical_dtype("Single"), "float32");
        assert_eq!(canonical_dtype("Double"), "float64");
        assert_eq!(canonical_dtype("Byte"), "uint8");
        assert_eq!(canonical_dtype("Boolean"), "bool");
        assert_eq!(canonical_dtype("Int32"), "int32");
        assert_eq!(canonical_dtype("UInt64"), "uint64");
    }

    #[test]
    fn test_every_alias_maps_to_a_canonical_name_that_maps_to_itself() {
        for (alias, dtype) in DTYPE_ALIASES {
            let canonical = canonical_dtype(alias);
            assert_eq!(canonical, dtype.name(), "alias {alias}");
            assert_eq!(canonical_dtype(&canonical), canonical);
        }
    }

    #[test]
    fn test_every_dtype_has_its_canonical_name_in_the_alias_table() {
        for dtype in DType::ALL {
            assert_eq!(DType::from_alias(dtype.name()), Some(*dtype));
        }
    }

    #[test]
    fn test_unknown_dtype_passes_through_lowercased() {
        assert_eq!(canonical_dtype("Complex128"), "complex128");
        assert_eq!(canonical_dtype("  Half "), "half");
        assert!("Complex128".parse::<DType>().is_err());
    }

    #[test]
    fn test_element_bytes() {
        assert_eq!(DType::Bool.element_bytes(), 1);
        assert_eq!(DType::UInt16.element_bytes(), 2);
        assert_eq!(DType::Float32.element_bytes(), 4);
        assert_eq!(DType::Int64.element_bytes(), 8);
        assert_eq!(DType::Decimal.element_bytes(), 16);
    }

    #[test]
    fn test_type_sets() {
        assert!(!TypeSet::Arithmetic.contains(DType::Bool));
        assert!(TypeSet::All.contains(DType::Bool));
        assert_eq!(TypeSet::Common.dtypes().len(), 4);
        assert!(TypeSet::Transcendental.dtypes().iter().all(|d| d.is_float()));
        assert!(!TypeSet::All.contains(DType::Decimal));
    }

    #[test]
    fn test_type_set_parse() {
        assert_eq!("Common".parse::<TypeSet>().unwrap(), TypeSet::Common);
        assert_eq!(" transcendental ".parse::<TypeSet>().unwrap(), TypeSet::Transcendental);
        assert!("int32".parse::<TypeSet>().is_err());
        for set in TypeSet::ALL {
            assert_eq!(set.to_string().parse::<TypeSet>().unwrap(), *set);
        }
    }

    #[test]
    fn test_dtype_serializes_as_canonical_name() {
        let json = serde_json::to_string(&DType::UInt8).unwrap();
        assert_eq!(json, "\"uint8\"");
        let back: DType = serde_json::from_str("\"float64\"").unwrap();
        assert_eq!(back, DType::Float64);
    }
}
