use super::point::Point2f;
use crate::error::{Error, Result};

/// An axis-aligned rectangular clip window.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`. Boundaries are inclusive,
/// so a point lying exactly on an edge is inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl ClipWindow {
    /// The window used by the clipping exercise.
    pub const DEFAULT: Self = Self {
        x_min: 100.0,
        y_min: 100.0,
        x_max: 400.0,
        y_max: 300.0,
    };

    /// Create a window, rejecting inverted or NaN bounds.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        // Written as negated `<=` so NaN bounds are rejected too.
        if !(x_min <= x_max) || !(y_min <= y_max) {
            return Err(Error::InvalidWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[inline]
    pub fn contains(&self, p: Point2f) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}
