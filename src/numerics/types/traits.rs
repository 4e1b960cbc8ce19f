// src/numerics/types/traits.rs
// Scalar trait shared by the vector and fixed-size matrix types.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// FloatingPoint is the scalar bound for every vector and fixed-size matrix.
///
/// Only `f32` and `f64` implement it. Besides the arithmetic operators it
/// exposes the handful of transcendental functions the transform factories
/// need, plus lossless/lossy conversions used at the precision boundary.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;
    /// Machine epsilon of the concrete type.
    fn epsilon() -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn is_finite(self) -> bool;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn to_f32(self) -> f32;
}

macro_rules! impl_floating_point {
    ($t:ident) => {
        impl FloatingPoint for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn two() -> Self { 2.0 }
            fn epsilon() -> Self { $t::EPSILON }
            fn abs(self) -> Self { $t::abs(self) }
            fn sqrt(self) -> Self { $t::sqrt(self) }
            fn sin(self) -> Self { $t::sin(self) }
            fn cos(self) -> Self { $t::cos(self) }
            fn tan(self) -> Self { $t::tan(self) }
            fn is_finite(self) -> bool { $t::is_finite(self) }
            fn from_f64(value: f64) -> Self { value as $t }
            fn to_f64(self) -> f64 { self as f64 }
            fn to_f32(self) -> f32 { self as f32 }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
