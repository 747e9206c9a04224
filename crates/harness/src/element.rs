//! Element types the scenario catalog can allocate.
//!
//! Integer arithmetic wraps on overflow, matching NumPy's fixed-width
//! semantics, so scenarios behave identically in debug and release builds.
//! Floating types run the array kernels through ndarray's own operators and
//! reductions.

use arraybench_core::DType;
use ndarray::{Array1, Array2, Axis, Zip};
use rand::rngs::StdRng;
use rand::Rng;

/// A numeric element usable in every scenario family.
pub trait Element: Copy + PartialOrd + Send + 'static {
    /// Canonical type tag.
    const DTYPE: DType;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Convert a small constant such as a fill value or scalar operand.
    fn from_small(v: u8) -> Self;
    /// Random value: `[0, 100)` for unsigned, `[-50, 50)` otherwise.
    fn sample(rng: &mut StdRng) -> Self;
    /// Random strictly positive value.
    fn sample_positive(rng: &mut StdRng) -> Self;
    /// Addition, wrapping for integers.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Subtraction, wrapping for integers.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Multiplication, wrapping for integers.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Absolute value, wrapping at the signed minimum.
    fn abs_value(self) -> Self;
    /// -1, 0 or 1.
    fn sign(self) -> Self;
    /// Lossy widening used for mean and variance.
    fn to_f64(self) -> f64;

    /// `a + b` into a new array.
    fn add_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> {
        Zip::from(a).and(b).map_collect(|&x, &y| x.wrapping_add(y))
    }

    /// `a - b` into a new array.
    fn sub_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> {
        Zip::from(a).and(b).map_collect(|&x, &y| x.wrapping_sub(y))
    }

    /// `a * b` into a new array.
    fn mul_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> {
        Zip::from(a).and(b).map_collect(|&x, &y| x.wrapping_mul(y))
    }

    /// `a + s` into a new array.
    fn add_scalar(a: &Array1<Self>, s: Self) -> Array1<Self> {
        a.mapv(|x| x.wrapping_add(s))
    }

    /// `a * a` into a new array.
    fn square_array(a: &Array1<Self>) -> Array1<Self> {
        a.mapv(|x| x.wrapping_mul(x))
    }

    /// `a + b` written into the preallocated `out`.
    fn add_into(out: &mut Array1<Self>, a: &Array1<Self>, b: &Array1<Self>) {
        Zip::from(out).and(a).and(b).for_each(|c, &x, &y| *c = x.wrapping_add(y));
    }

    /// Sum of every element.
    fn sum_array(a: &Array1<Self>) -> Self {
        a.fold(Self::ZERO, |acc, &x| acc.wrapping_add(x))
    }

    /// Sums along `axis`.
    fn sum_axis_array(a: &Array2<Self>, axis: Axis) -> Array1<Self> {
        a.fold_axis(axis, Self::ZERO, |&acc, &x| acc.wrapping_add(x))
    }

    /// Arithmetic mean, `None` for an empty array.
    fn mean_array(a: &Array1<Self>) -> Option<f64> {
        if a.is_empty() {
            return None;
        }
        Some(a.iter().map(|x| x.to_f64()).sum::<f64>() / a.len() as f64)
    }
}

/// Floating point elements.
pub trait FloatElement: Element {
    /// Narrow from `f64`.
    fn from_f64(v: f64) -> Self;
    /// `a / b` into a new array.
    fn divide_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self>;
    /// Population variance.
    fn var_array(a: &Array1<Self>) -> Self;
    /// Population standard deviation.
    fn std_array(a: &Array1<Self>) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Round toward negative infinity.
    fn floor(self) -> Self;
    /// Round toward positive infinity.
    fn ceil(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// e^x.
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Base-10 logarithm.
    fn log10(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty => $dtype:expr),* $(,)?) => {$(
        impl Element for $t {
            const DTYPE: DType = $dtype;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn from_small(v: u8) -> Self { v as $t }
            fn sample(rng: &mut StdRng) -> Self { rng.gen_range(0..100) }
            fn sample_positive(rng: &mut StdRng) -> Self { rng.gen_range(1..100) }
            fn wrapping_add(self, rhs: Self) -> Self { <$t>::wrapping_add(self, rhs) }
            fn wrapping_sub(self, rhs: Self) -> Self { <$t>::wrapping_sub(self, rhs) }
            fn wrapping_mul(self, rhs: Self) -> Self { <$t>::wrapping_mul(self, rhs) }
            fn abs_value(self) -> Self { self }
            fn sign(self) -> Self { if self == 0 { 0 } else { 1 } }
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $dtype:expr),* $(,)?) => {$(
        impl Element for $t {
            const DTYPE: DType = $dtype;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn from_small(v: u8) -> Self { v as $t }
            fn sample(rng: &mut StdRng) -> Self { rng.gen_range(-50..50) }
            fn sample_positive(rng: &mut StdRng) -> Self { rng.gen_range(1..100) }
            fn wrapping_add(self, rhs: Self) -> Self { <$t>::wrapping_add(self, rhs) }
            fn wrapping_sub(self, rhs: Self) -> Self { <$t>::wrapping_sub(self, rhs) }
            fn wrapping_mul(self, rhs: Self) -> Self { <$t>::wrapping_mul(self, rhs) }
            fn abs_value(self) -> Self { <$t>::wrapping_abs(self) }
            fn sign(self) -> Self { <$t>::signum(self) }
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty => $dtype:expr),* $(,)?) => {$(
        impl Element for $t {
            const DTYPE: DType = $dtype;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn from_small(v: u8) -> Self { v as $t }
            fn sample(rng: &mut StdRng) -> Self { (rng.gen::<f64>() * 100.0 - 50.0) as $t }
            fn sample_positive(rng: &mut StdRng) -> Self { (rng.gen::<f64>() * 100.0 + 1.0) as $t }
            fn wrapping_add(self, rhs: Self) -> Self { self + rhs }
            fn wrapping_sub(self, rhs: Self) -> Self { self - rhs }
            fn wrapping_mul(self, rhs: Self) -> Self { self * rhs }
            fn abs_value(self) -> Self { <$t>::abs(self) }
            fn sign(self) -> Self { if self == 0.0 { 0.0 } else { <$t>::signum(self) } }
            fn to_f64(self) -> f64 { self as f64 }

            fn add_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> { a + b }
            fn sub_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> { a - b }
            fn mul_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> { a * b }
            fn add_scalar(a: &Array1<Self>, s: Self) -> Array1<Self> { a + s }
            fn square_array(a: &Array1<Self>) -> Array1<Self> { a * a }
            fn add_into(out: &mut Array1<Self>, a: &Array1<Self>, b: &Array1<Self>) {
                Zip::from(out).and(a).and(b).for_each(|c, &x, &y| *c = x + y);
            }
            fn sum_array(a: &Array1<Self>) -> Self { a.sum() }
            fn sum_axis_array(a: &Array2<Self>, axis: Axis) -> Array1<Self> { a.sum_axis(axis) }
            fn mean_array(a: &Array1<Self>) -> Option<f64> { a.mean().map(f64::from) }
        }

        impl FloatElement for $t {
            fn from_f64(v: f64) -> Self { v as $t }
            fn divide_arrays(a: &Array1<Self>, b: &Array1<Self>) -> Array1<Self> { a / b }
            fn var_array(a: &Array1<Self>) -> Self { a.var(0.0) }
            fn std_array(a: &Array1<Self>) -> Self { a.std(0.0) }
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn floor(self) -> Self { <$t>::floor(self) }
            fn ceil(self) -> Self { <$t>::ceil(self) }
            fn round(self) -> Self { <$t>::round(self) }
            fn exp(self) -> Self { <$t>::exp(self) }
            fn ln(self) -> Self { <$t>::ln(self) }
            fn log10(self) -> Self { <$t>::log10(self) }
            fn sin(self) -> Self { <$t>::sin(self) }
            fn cos(self) -> Self { <$t>::cos(self) }
        }
    )*};
}

impl_unsigned!(u8 => DType::UInt8, u16 => DType::UInt16, u32 => DType::UInt32, u64 => DType::UInt64);
impl_signed!(i16 => DType::Int16, i32 => DType::Int32, i64 => DType::Int64);
impl_float!(f32 => DType::Float32, f64 => DType::Float64);

/// `n` values drawn with [`Element::sample`].
pub fn random_array<T: Element>(rng: &mut StdRng, n: usize) -> Array1<T> {
    Array1::from_iter((0..n).map(|_| T::sample(rng)))
}

/// `n` values drawn with [`Element::sample_positive`].
pub fn positive_array<T: Element>(rng: &mut StdRng, n: usize) -> Array1<T> {
    Array1::from_iter((0..n).map(|_| T::sample_positive(rng)))
}

/// `n` floats drawn uniformly from `[0, scale)`.
pub fn uniform_array<T: FloatElement>(rng: &mut StdRng, n: usize, scale: f64) -> Array1<T> {
    Array1::from_iter((0..n).map(|_| T::from_f64(rng.gen::<f64>() * scale)))
}

/// Dispatch a generic scenario constructor over every arithmetic type.
///
/// Evaluates to an empty `Vec` for types without a Rust element mapping.
#[macro_export]
macro_rules! dispatch_arithmetic {
    ($dtype:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $dtype {
            ::arraybench_core::DType::UInt8 => $func::<u8>($($arg),*),
            ::arraybench_core::DType::Int16 => $func::<i16>($($arg),*),
            ::arraybench_core::DType::UInt16 => $func::<u16>($($arg),*),
            ::arraybench_core::DType::Int32 => $func::<i32>($($arg),*),
            ::arraybench_core::DType::UInt32 => $func::<u32>($($arg),*),
            ::arraybench_core::DType::Int64 => $func::<i64>($($arg),*),
            ::arraybench_core::DType::UInt64 => $func::<u64>($($arg),*),
            ::arraybench_core::DType::Float32 => $func::<f32>($($arg),*),
            ::arraybench_core::DType::Float64 => $func::<f64>($($arg),*),
            ::arraybench_core::DType::Bool | ::arraybench_core::DType::Decimal => Vec::new(),
        }
    };
}

/// Dispatch a generic scenario constructor over the floating types.
#[macro_export]
macro_rules! dispatch_float {
    ($dtype:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $dtype {
            ::arraybench_core::DType::Float32 => $func::<f32>($($arg),*),
            ::arraybench_core::DType::Float64 => $func::<f64>($($arg),*),
            _ => Vec::new(),
        }
    };
}
