use crate::utils::round::ClipperRound;
use num_traits::{Num, Signed, ToPrimitive};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar types a [`Point`](crate::geometry::point::Point) can be built on: `i64` for engine
/// coordinates, `i128` for exact products and `f64` for offset geometry.
pub trait Number:
    Num
    + Copy
    + PartialOrd
    + ToPrimitive
    + ClipperRound
    + Signed
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn min_num(self, other: Self) -> Self;
    fn max_num(self, other: Self) -> Self;
    fn as_f64(self) -> f64;
}

impl Number for f64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Number for i64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Number for i128 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
