use crate::constants::DEFAULT_SCALE;
use crate::error::{ClipError, Result};
use crate::geometry::point::Point;
use crate::utils::round::ClipperRound;

/// Multiplier between host coordinates and engine coordinates. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f64);

impl Scale {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ClipError::InvalidScale(value))
        }
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `round(value * scale)`. Results outside the `i64` range saturate; the engine
    /// rejects them.
    #[inline(always)]
    pub fn to_fixed(&self, value: f64) -> i64 {
        (value * self.0).clipper_rounded() as i64
    }

    #[inline(always)]
    pub fn to_real(&self, value: i64) -> f64 {
        value as f64 / self.0
    }

    #[inline(always)]
    pub fn to_fixed_point(&self, x: f64, y: f64) -> Point<i64> {
        Point::new(self.to_fixed(x), self.to_fixed(y))
    }

    #[inline(always)]
    pub fn to_real_point(&self, point: &Point<i64>) -> [f64; 2] {
        [self.to_real(point.x), self.to_real(point.y)]
    }

    /// Lengths (offset distance, miter limit, arc tolerance) scale linearly, unrounded.
    #[inline(always)]
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.0
    }

    #[inline(always)]
    pub fn unscale_area(&self, area: f64) -> f64 {
        area / (self.0 * self.0)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}
