// Copyright 2025 Arraybench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Closed alias tables mapping source identifiers to canonical operations.
//!
//! Two independent tables feed the same [`CanonicalOp`] set:
//!
//! - [`METHOD_ALIASES`] maps BenchmarkDotNet method identifiers
//!   (`Add_Elementwise`, `Sum_Axis0`, ...) directly.
//! - [`NAME_ALIASES`] maps free-text operation names, after normalization,
//!   that differ from the canonical spelling (`np.sum(a, axis=0)`, ...).

use std::fmt;

/// Operations both implementations are expected to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalOp {
    /// `a + b`
    Add,
    /// `a + scalar`
    AddScalar,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a * a`
    MultiplySame,
    /// `a / b`
    Divide,
    /// `np.sum`
    Sum,
    /// `np.sum axis=0`
    SumAxis0,
    /// `np.sum axis=1`
    SumAxis1,
    /// `np.mean`
    Mean,
    /// `np.var`
    Var,
    /// `np.std`
    Std,
    /// `np.amin`
    Amin,
    /// `np.amax`
    Amax,
    /// `np.argmin`
    ArgMin,
    /// `np.argmax`
    ArgMax,
    /// `np.sqrt`
    Sqrt,
    /// `np.abs`
    Abs,
    /// `np.sign`
    Sign,
    /// `np.floor`
    Floor,
    /// `np.ceil`
    Ceil,
    /// `np.round`
    Round,
    /// `np.exp`
    Exp,
    /// `np.log`
    Log,
    /// `np.log10`
    Log10,
    /// `np.sin`
    Sin,
    /// `np.cos`
    Cos,
    /// `np.zeros`
    Zeros,
    /// `np.ones`
    Ones,
    /// `np.full`
    Full,
    /// `np.empty`
    Empty,
    /// `np.copy`
    Copy,
    /// `np.zeros_like`
    ZerosLike,
}

impl CanonicalOp {
    /// Every canonical operation.
    pub const ALL: &'static [CanonicalOp] = &[
        CanonicalOp::Add,
        CanonicalOp::AddScalar,
        CanonicalOp::Subtract,
        CanonicalOp::Multiply,
        CanonicalOp::MultiplySame,
        CanonicalOp::Divide,
        CanonicalOp::Sum,
        CanonicalOp::SumAxis0,
        CanonicalOp::SumAxis1,
        CanonicalOp::Mean,
        CanonicalOp::Var,
        CanonicalOp::Std,
        CanonicalOp::Amin,
        CanonicalOp::Amax,
        CanonicalOp::ArgMin,
        CanonicalOp::ArgMax,
        CanonicalOp::Sqrt,
        CanonicalOp::Abs,
        CanonicalOp::Sign,
        CanonicalOp::Floor,
        CanonicalOp::Ceil,
        CanonicalOp::Round,
        CanonicalOp::Exp,
        CanonicalOp::Log,
        CanonicalOp::Log10,
        CanonicalOp::Sin,
        CanonicalOp::Cos,
        CanonicalOp::Zeros,
        CanonicalOp::Ones,
        CanonicalOp::Full,
        CanonicalOp::Empty,
        CanonicalOp::Copy,
        CanonicalOp::ZerosLike,
    ];

    /// Canonical operation string used in join keys.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalOp::Add => "a + b",
            CanonicalOp::AddScalar => "a + scalar",
            CanonicalOp::Subtract => "a - b",
            CanonicalOp::Multiply => "a * b",
            CanonicalOp::MultiplySame => "a * a",
            CanonicalOp::Divide => "a / b",
            CanonicalOp::Sum => "np.sum",
            CanonicalOp::SumAxis0 => "np.sum axis=0",
            CanonicalOp::SumAxis1 => "np.sum axis=1",
            CanonicalOp::Mean => "np.mean",
            CanonicalOp::Var => "np.var",
            CanonicalOp::Std => "np.std",
            CanonicalOp::Amin => "np.amin",
            CanonicalOp::Amax => "np.amax",
            CanonicalOp::ArgMin => "np.argmin",
            CanonicalOp::ArgMax => "np.argmax",
            CanonicalOp::Sqrt => "np.sqrt",
            CanonicalOp::Abs => "np.abs",
            CanonicalOp::Sign => "np.sign",
            CanonicalOp::Floor => "np.floor",
            CanonicalOp::Ceil => "np.ceil",
            CanonicalOp::Round => "np.round",
            CanonicalOp::Exp => "np.exp",
            CanonicalOp::Log => "np.log",
            CanonicalOp::Log10 => "np.log10",
            CanonicalOp::Sin => "np.sin",
            CanonicalOp::Cos => "np.cos",
            CanonicalOp::Zeros => "np.zeros",
            CanonicalOp::Ones => "np.ones",
            CanonicalOp::Full => "np.full",
            CanonicalOp::Empty => "np.empty",
            CanonicalOp::Copy => "np.copy",
            CanonicalOp::ZerosLike => "np.zeros_like",
        }
    }

    /// Look up a BenchmarkDotNet method identifier. Case-sensitive.
    pub fn from_method(method: &str) -> Option<CanonicalOp> {
        METHOD_ALIASES
            .iter()
            .find(|(alias, _)| *alias == method)
            .map(|(_, op)| *op)
    }

    /// Look up an already-normalized free-text name.
    pub fn from_name_alias(normalized: &str) -> Option<CanonicalOp> {
        NAME_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, op)| *op)
    }
}

impl fmt::Display for CanonicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BenchmarkDotNet method identifiers.
pub const METHOD_ALIASES: &[(&str, CanonicalOp)] = &[
    ("Add_Elementwise", CanonicalOp::Add),
    ("Add_Scalar", CanonicalOp::AddScalar),
    ("Subtract_Elementwise", CanonicalOp::Subtract),
    ("Multiply_Elementwise", CanonicalOp::Multiply),
    ("Multiply_Same", CanonicalOp::MultiplySame),
    ("Divide_Elementwise", CanonicalOp::Divide),
    ("Sum_Full", CanonicalOp::Sum),
    ("Sum_Axis0", CanonicalOp::SumAxis0),
    ("Sum_Axis1", CanonicalOp::SumAxis1),
    ("Mean_Full", CanonicalOp::Mean),
    ("Var_Full", CanonicalOp::Var),
    ("Std_Full", CanonicalOp::Std),
    ("Min_Full", CanonicalOp::Amin),
    ("Max_Full", CanonicalOp::Amax),
    ("ArgMin_Full", CanonicalOp::ArgMin),
    ("ArgMax_Full", CanonicalOp::ArgMax),
    ("Sqrt", CanonicalOp::Sqrt),
    ("Abs", CanonicalOp::Abs),
    ("Sign", CanonicalOp::Sign),
    ("Floor", CanonicalOp::Floor),
    ("Ceil", CanonicalOp::Ceil),
    ("Round", CanonicalOp::Round),
    ("Exp", CanonicalOp::Exp),
    ("Log", CanonicalOp::Log),
    ("Log10", CanonicalOp::Log10),
    ("Sin", CanonicalOp::Sin),
    ("Cos", CanonicalOp::Cos),
    ("Zeros", CanonicalOp::Zeros),
    ("Ones", CanonicalOp::Ones),
    ("Full", CanonicalOp::Full),
    ("Empty", CanonicalOp::Empty),
    ("Copy", CanonicalOp::Copy),
    ("Zeros_Like", CanonicalOp::ZerosLike),
];

/// Normalized free-text spellings that differ from the canonical string.
///
/// Keys are in normalized form: lowercase, single spaces, no trailing
/// annotation.
pub const NAME_ALIASES: &[(&str, CanonicalOp)] = &[
    ("np.sum(a) [full]", CanonicalOp::Sum),
    ("np.sum(a)", CanonicalOp::Sum),
    ("np.sum(a, axis=0)", CanonicalOp::SumAxis0),
    ("np.sum(a, axis=1)", CanonicalOp::SumAxis1),
    ("np.add(a, b)", CanonicalOp::Add),
    ("np.subtract(a, b)", CanonicalOp::Subtract),
    ("np.multiply(a, b)", CanonicalOp::Multiply),
    ("np.divide(a, b)", CanonicalOp::Divide),
    ("np.min", CanonicalOp::Amin),
    ("np.max", CanonicalOp::Amax),
];
