use std::fmt;
use std::ops::{Add, Sub};

use approx::{AbsDiffEq, RelativeEq};

/// A 2D point.
///
/// Rasterizers produce integer pixel points ([`Point2i`]); the clipper works on
/// floating point pixel coordinates ([`Point2f`]). Points are plain values and
/// are never mutated by the algorithms that consume them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

/// Integer pixel coordinate.
pub type Point2i = Point2<i32>;

/// Floating point coordinate, as captured from pointer events.
pub type Point2f = Point2<f64>;

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point2i {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn to_f64(self) -> Point2f {
        Point2f::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Point2f {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Round to the nearest pixel.
    pub fn round(self) -> Point2i {
        Point2i::new(self.x.round() as i32, self.y.round() as i32)
    }

    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(i32, i32)> for Point2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point2f {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2i> for Point2f {
    fn from(p: Point2i) -> Self {
        p.to_f64()
    }
}

/// Component-wise addition.
impl<T: Add<Output = T>> Add for Point2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Component-wise subtraction.
impl<T: Sub<Output = T>> Sub for Point2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl fmt::Display for Point2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Two decimals, matching how clip traces are printed.
impl fmt::Display for Point2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl AbsDiffEq for Point2f {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point2f {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
