use crate::utils::number::Number;
use crate::utils::round::ClipperRound;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline(always)]
    pub fn scale_up(&self, value: T) -> Self {
        Self::new(self.x * value, self.y * value)
    }

    /// Clockwise perpendicular: `(y, -x)`.
    #[inline(always)]
    pub fn normal(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Counter-clockwise perpendicular: `(-y, x)`.
    #[inline(always)]
    pub fn tangent(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` is counter-clockwise of `self`.
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline(always)]
    pub fn length(&self) -> f64 {
        self.dot(self).as_f64().sqrt()
    }

    #[inline(always)]
    pub fn min_with(&self, other: &Self) -> Self {
        Self::new(self.x.min_num(other.x), self.y.min_num(other.y))
    }

    #[inline(always)]
    pub fn max_with(&self, other: &Self) -> Self {
        Self::new(self.x.max_num(other.x), self.y.max_num(other.y))
    }
}

impl Point<i64> {
    #[inline(always)]
    pub fn to_f64(&self) -> Point<f64> {
        Point::new(self.x as f64, self.y as f64)
    }

    #[inline(always)]
    pub fn widen(&self) -> Point<i128> {
        Point::new(self.x as i128, self.y as i128)
    }
}

impl Point<f64> {
    /// Unit vector in the same direction; zero vectors are returned unchanged.
    #[inline(always)]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            *self
        } else {
            Self::new(self.x / len, self.y / len)
        }
    }

    #[inline(always)]
    pub fn clipper_round(&self) -> Point<i64> {
        Point::new(
            self.x.clipper_rounded() as i64,
            self.y.clipper_rounded() as i64,
        )
    }
}
