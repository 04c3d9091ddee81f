//! Bresenham line rasterization.
//!
//! Converts two integer endpoints into the pixels approximating the ideal
//! segment between them, using only integer arithmetic.
//!
//! # Algorithm Overview
//!
//! The axis with the larger delta is the *driving axis*. Every iteration steps
//! it by exactly one pixel. The other (minor) axis only steps when the
//! midpoint decision variable says the ideal line has drifted past the middle
//! of the current pixel:
//!
//! ```text
//! p0      = 2 * minor - major
//! p < 0   : p += 2 * minor                  (stay on the same minor row)
//! p >= 0  : p += 2 * minor - 2 * major      (step the minor axis)
//! ```
//!
//! Horizontal, vertical and perfectly diagonal lines are handled up front so
//! their output is exact and cheap. Their pixel sets are identical to what the
//! general walk would produce.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use crate::math::Point2i;

/// Rasterize the segment `(x0, y0) -> (x1, y1)`.
///
/// Returns exactly `max(|dx|, |dy|) + 1` pixels, both endpoints included, with
/// neighbouring pixels 8-connected. Horizontal and vertical segments are
/// emitted in ascending coordinate order; every other segment walks from
/// `(x0, y0)` to `(x1, y1)`.
///
/// Total over all inputs: identical endpoints yield a single pixel.
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point2i> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    if dy == 0 {
        return (x0.min(x1)..=x0.max(x1))
            .map(|x| Point2i::new(x, y0))
            .collect();
    }

    if dx == 0 {
        return (y0.min(y1)..=y0.max(y1))
            .map(|y| Point2i::new(x0, y))
            .collect();
    }

    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    if dx == dy {
        return (0..=dx)
            .map(|i| Point2i::new(x0 + i * sx, y0 + i * sy))
            .collect();
    }

    walk(x0, y0, dx, dy, sx, sy)
}

/// Rasterize a segment between two pixel points.
pub fn rasterize_segment(start: Point2i, end: Point2i) -> Vec<Point2i> {
    rasterize_line(start.x, start.y, end.x, end.y)
}

/// Rasterize the outline of a triangle.
///
/// Edges are drawn as `a-b`, `a-c`, `b-c` and concatenated. Shared corners
/// appear once per edge that touches them.
pub fn rasterize_triangle_outline(a: Point2i, b: Point2i, c: Point2i) -> Vec<Point2i> {
    let mut pixels = rasterize_segment(a, b);
    pixels.extend(rasterize_segment(a, c));
    pixels.extend(rasterize_segment(b, c));
    pixels
}

/// The general midpoint walk, without any special casing.
///
/// `dx` and `dy` are absolute deltas, `sx` and `sy` the step directions.
pub(crate) fn walk(x0: i32, y0: i32, dx: i32, dy: i32, sx: i32, sy: i32) -> Vec<Point2i> {
    let mut x = x0;
    let mut y = y0;
    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

    if dx > dy {
        // X drives
        let mut p = 2 * dy - dx;
        for _ in 0..=dx {
            points.push(Point2i::new(x, y));
            if p < 0 {
                p += 2 * dy;
            } else {
                y += sy;
                p += 2 * dy - 2 * dx;
            }
            x += sx;
        }
    } else {
        // Y drives
        let mut p = 2 * dx - dy;
        for _ in 0..=dy {
            points.push(Point2i::new(x, y));
            if p < 0 {
                p += 2 * dx;
            } else {
                x += sx;
                p += 2 * dx - 2 * dy;
            }
            y += sy;
        }
    }

    points
}
