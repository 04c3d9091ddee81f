use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::math::{ClipWindow, Point2f};

/// Which half-planes of a [`ClipWindow`] a point lies outside of.
///
/// A 4-bit set; the empty set means the point is inside (or on the edge of)
/// the window. LEFT and RIGHT are never both set, nor are BOTTOM and TOP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0b0000);
    pub const LEFT: Self = Self(0b0001);
    pub const RIGHT: Self = Self(0b0010);
    pub const BOTTOM: Self = Self(0b0100);
    pub const TOP: Self = Self(0b1000);

    /// Classify `p` against `window`.
    pub fn compute(p: Point2f, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;

        if p.x < window.x_min() {
            code |= Self::LEFT;
        } else if p.x > window.x_max() {
            code |= Self::RIGHT;
        }

        if p.y < window.y_min() {
            code |= Self::BOTTOM;
        } else if p.y > window.y_max() {
            code |= Self::TOP;
        }

        code
    }

    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// The single boundary to clip against next.
    ///
    /// Bits are tested TOP, BOTTOM, RIGHT, LEFT and only the first set one is
    /// returned. `None` for an inside point.
    pub fn first_violated(self) -> Option<Self> {
        [Self::TOP, Self::BOTTOM, Self::RIGHT, Self::LEFT]
            .into_iter()
            .find(|&edge| self.contains(edge))
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Outcode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Four binary digits, TOP bit first.
impl fmt::Display for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
