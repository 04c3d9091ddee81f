//! Bresenham circle rasterization.
//!
//! Walks one octant of the circle, from the top of the circle (`x = 0`,
//! `y = radius`) towards the 45° diagonal, and mirrors every step into the
//! other seven octants:
//!
//! ```text
//!          (-x, y) | (x, y)
//!      (-y, x)     |     (y, x)
//!     -------------+-------------
//!      (-y,-x)     |     (y,-x)
//!          (-x,-y) | (x,-y)
//! ```
//!
//! Points on octant boundaries (axis crossings and `x == y`) are emitted once
//! per octant that produces them. Callers that need a set should dedupe.

use crate::error::{Error, Result};
use crate::math::Point2i;

/// Rasterize a circle outline centered at `(cx, cy)`.
///
/// Emits 8 points per decision step, including the initial `(0, radius)`
/// state and the state that ends the walk. A zero radius yields eight copies
/// of the center.
///
/// # Panics
/// Panics if the circle's bounding box `cx ± radius`, `cy ± radius` does not
/// fit in `i32` coordinates. [`try_rasterize_circle`] reports this as an error.
pub fn rasterize_circle(cx: i32, cy: i32, radius: u32) -> Vec<Point2i> {
    let radius = match checked_radius(cx, cy, i64::from(radius)) {
        Some(r) => r,
        None => panic!("circle at ({cx}, {cy}) with radius {radius} leaves the i32 plane"),
    };
    walk_octant(cx, cy, radius)
}

/// Signed-radius entry point for callers holding an `i32`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `radius` is negative or the circle
/// extends past the `i32` coordinate range.
pub fn try_rasterize_circle(cx: i32, cy: i32, radius: i32) -> Result<Vec<Point2i>> {
    if radius < 0 {
        return Err(Error::InvalidArgument(format!(
            "circle radius must be >= 0, got {radius}"
        )));
    }
    let radius = checked_radius(cx, cy, i64::from(radius)).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "circle at ({cx}, {cy}) with radius {radius} leaves the i32 plane"
        ))
    })?;
    Ok(walk_octant(cx, cy, radius))
}

/// `radius` as an `i32`, if every mirrored point stays representable.
fn checked_radius(cx: i32, cy: i32, radius: i64) -> Option<i32> {
    let fits = |c: i32| {
        let c = i64::from(c);
        c - radius >= i64::from(i32::MIN) && c + radius <= i64::from(i32::MAX)
    };
    if fits(cx) && fits(cy) {
        i32::try_from(radius).ok()
    } else {
        None
    }
}

fn walk_octant(cx: i32, cy: i32, radius: i32) -> Vec<Point2i> {
    let mut x = 0;
    let mut y = radius;
    // i64 keeps 4 * (x - y) clear of overflow for radii near i32::MAX.
    let mut p = 3 - 2 * i64::from(radius);

    // Roughly radius / sqrt(2) steps per octant.
    let steps = (radius as usize / 4 * 3).saturating_add(2).min(1 << 16);
    let mut points = Vec::with_capacity(8 * steps);
    push_octants(&mut points, cx, cy, x, y);

    while x < y {
        x += 1;
        if p < 0 {
            p += 4 * i64::from(x) + 6;
        } else {
            y -= 1;
            p += 4 * i64::from(x - y) + 10;
        }
        push_octants(&mut points, cx, cy, x, y);
    }

    points
}

#[inline]
fn push_octants(points: &mut Vec<Point2i>, cx: i32, cy: i32, x: i32, y: i32) {
    points.extend_from_slice(&[
        Point2i::new(cx + x, cy + y),
        Point2i::new(cx - x, cy + y),
        Point2i::new(cx + x, cy - y),
        Point2i::new(cx - x, cy - y),
        Point2i::new(cx + y, cy + x),
        Point2i::new(cx - y, cy + x),
        Point2i::new(cx + y, cy - x),
        Point2i::new(cx - y, cy - x),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_radius_is_center_only() {
        let points = rasterize_circle(12, -4, 0);
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|&p| p == Point2i::new(12, -4)));
    }

    #[test]
    fn radius_one() {
        // (0,1) then (1,0): two states, 16 points, four distinct pixels.
        let points = rasterize_circle(0, 0, 1);
        assert_eq!(points.len(), 16);
        let set: HashSet<Point2i> = points.into_iter().collect();
        let expected: HashSet<Point2i> = [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .map(Point2i::from)
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn first_state_order() {
        let points = rasterize_circle(10, 20, 5);
        assert_eq!(
            &points[..8],
            &[
                Point2i::new(10, 25),
                Point2i::new(10, 25),
                Point2i::new(10, 15),
                Point2i::new(10, 15),
                Point2i::new(15, 20),
                Point2i::new(5, 20),
                Point2i::new(15, 20),
                Point2i::new(5, 20),
            ]
        );
    }

    #[test]
    fn radius_five_octant() {
        // Offsets visited: (0,5) (1,5) (2,4) (3,3)
        let points = rasterize_circle(0, 0, 5);
        assert_eq!(points.len(), 4 * 8);
        let firsts: Vec<Point2i> = points.chunks(8).map(|c| c[0]).collect();
        assert_eq!(
            firsts,
            vec![
                Point2i::new(0, 5),
                Point2i::new(1, 5),
                Point2i::new(2, 4),
                Point2i::new(3, 3),
            ]
        );
    }

    #[test]
    fn symmetric_about_center() {
        let (cx, cy) = (-7, 3);
        let set: HashSet<Point2i> = rasterize_circle(cx, cy, 23).into_iter().collect();
        for p in &set {
            let (dx, dy) = (p.x - cx, p.y - cy);
            for (tx, ty) in [(dx, -dy), (-dx, dy), (dy, dx), (-dy, -dx)] {
                assert!(set.contains(&Point2i::new(cx + tx, cy + ty)));
            }
        }
    }

    #[test]
    fn circle_must_fit_coordinate_range() {
        assert!(matches!(
            try_rasterize_circle(i32::MAX - 2, 0, 5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            try_rasterize_circle(0, i32::MIN + 1, 2),
            Err(Error::InvalidArgument(_))
        ));
        let edge = try_rasterize_circle(i32::MAX - 5, i32::MIN + 5, 5).unwrap();
        assert!(edge.contains(&Point2i::new(i32::MAX, i32::MIN + 5)));
        assert!(edge.contains(&Point2i::new(i32::MAX - 5, i32::MIN)));
    }

    #[test]
    #[should_panic(expected = "leaves the i32 plane")]
    fn oversized_radius_panics_with_message() {
        rasterize_circle(0, 0, u32::MAX);
    }

    #[test]
    #[should_panic(expected = "leaves the i32 plane")]
    fn center_near_edge_panics_with_message() {
        rasterize_circle(i32::MAX, 0, 1);
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(matches!(
            try_rasterize_circle(0, 0, -1),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(try_rasterize_circle(0, 0, 3).unwrap(), rasterize_circle(0, 0, 3));
    }
}
