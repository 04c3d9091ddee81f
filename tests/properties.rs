//! Property tests for the rasterizers and the clipper.

use std::collections::HashSet;

use proptest::prelude::*;
use rasterlab::clip::{LineClipper, Outcode, MAX_CLIP_ITERATIONS};
use rasterlab::raster::{rasterize_circle, rasterize_line};
use rasterlab::{ClipWindow, Point2f, Point2i};

fn coord() -> impl Strategy<Value = i32> {
    -2000..2000i32
}

fn window_coord() -> impl Strategy<Value = f64> {
    (-200.0..700.0f64).prop_map(|v| (v * 4.0).round() / 4.0)
}

proptest! {
    #[test]
    fn line_length_is_major_delta_plus_one(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let pixels = rasterize_line(x0, y0, x1, y1);
        let major = (x1 - x0).abs().max((y1 - y0).abs());
        prop_assert_eq!(pixels.len(), major as usize + 1);
    }

    #[test]
    fn line_includes_both_endpoints(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let pixels = rasterize_line(x0, y0, x1, y1);
        let ends: HashSet<Point2i> = [pixels[0], pixels[pixels.len() - 1]].into_iter().collect();
        let expected: HashSet<Point2i> =
            [Point2i::new(x0, y0), Point2i::new(x1, y1)].into_iter().collect();
        prop_assert_eq!(ends, expected);
    }

    #[test]
    fn sloped_line_walks_from_start(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        prop_assume!(x0 != x1 && y0 != y1);
        let pixels = rasterize_line(x0, y0, x1, y1);
        prop_assert_eq!(pixels[0], Point2i::new(x0, y0));
        prop_assert_eq!(pixels[pixels.len() - 1], Point2i::new(x1, y1));
    }

    #[test]
    fn line_is_eight_connected(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let pixels = rasterize_line(x0, y0, x1, y1);
        for pair in pixels.windows(2) {
            let step = (pair[1].x - pair[0].x).abs().max((pair[1].y - pair[0].y).abs());
            prop_assert_eq!(step, 1, "gap between {} and {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn line_stays_within_half_pixel(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let (dx, dy) = (x1 - x0, y1 - y0);
        prop_assume!(dx != 0 || dy != 0);
        for p in rasterize_line(x0, y0, x1, y1) {
            let error = if dx.abs() >= dy.abs() {
                let ideal = f64::from(y0) + f64::from(p.x - x0) * f64::from(dy) / f64::from(dx);
                (f64::from(p.y) - ideal).abs()
            } else {
                let ideal = f64::from(x0) + f64::from(p.y - y0) * f64::from(dx) / f64::from(dy);
                (f64::from(p.x) - ideal).abs()
            };
            prop_assert!(error <= 0.5 + 1e-9, "{} is {} off the ideal line", p, error);
        }
    }

    #[test]
    fn reversed_line_covers_same_pixels(
        x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
    ) {
        let forward = rasterize_line(x0, y0, x1, y1);
        let backward = rasterize_line(x1, y1, x0, y0);
        prop_assert_eq!(forward.len(), backward.len());
        // Midpoint ties can break differently per direction.
        prop_assert!(backward.contains(&forward[0]));
        prop_assert!(backward.contains(&forward[forward.len() - 1]));
    }

    #[test]
    fn circle_points_are_near_the_radius(
        cx in -500..500i32, cy in -500..500i32, r in 0..500u32
    ) {
        let center = Point2i::new(cx, cy).to_f64();
        for p in rasterize_circle(cx, cy, r) {
            let d = center.distance(p.to_f64()).round();
            prop_assert!((d - f64::from(r)).abs() <= 1.0, "{} at distance {}", p, d);
        }
    }

    #[test]
    fn circle_is_eightfold_symmetric(cx in -500..500i32, cy in -500..500i32, r in 0..500u32) {
        let points = rasterize_circle(cx, cy, r);
        prop_assert_eq!(points.len() % 8, 0);
        let set: HashSet<(i32, i32)> = points.iter().map(|p| (p.x - cx, p.y - cy)).collect();
        for &(x, y) in &set {
            for mirrored in [(-x, y), (x, -y), (y, x), (-y, -x)] {
                prop_assert!(set.contains(&mirrored), "({}, {}) has no mirror {:?}", x, y, mirrored);
            }
        }
    }

    #[test]
    fn clip_result_lies_in_window(
        x1 in window_coord(), y1 in window_coord(),
        x2 in window_coord(), y2 in window_coord()
    ) {
        let window = ClipWindow::DEFAULT;
        let clipper = LineClipper::new(window);
        let trace = clipper.clip_traced(Point2f::new(x1, y1), Point2f::new(x2, y2));
        prop_assert!(trace.steps.len() <= MAX_CLIP_ITERATIONS);
        if let Some((a, b)) = trace.result {
            prop_assert!(window.contains(a), "{} outside", a);
            prop_assert!(window.contains(b), "{} outside", b);
        }
    }

    #[test]
    fn clip_result_is_on_the_input_line(
        x1 in window_coord(), y1 in window_coord(),
        x2 in window_coord(), y2 in window_coord()
    ) {
        let (p1, p2) = (Point2f::new(x1, y1), Point2f::new(x2, y2));
        let length = p1.distance(p2);
        prop_assume!(length > 1.0);
        if let Some((a, b)) = LineClipper::new(ClipWindow::DEFAULT).clip(p1, p2) {
            for q in [a, b] {
                let cross = (p2.x - p1.x) * (q.y - p1.y) - (p2.y - p1.y) * (q.x - p1.x);
                prop_assert!((cross / length).abs() < 1e-6, "{} is off the line", q);
            }
        }
    }

    #[test]
    fn inside_segment_is_unchanged(
        x1 in 100.0..=400.0f64, y1 in 100.0..=300.0f64,
        x2 in 100.0..=400.0f64, y2 in 100.0..=300.0f64
    ) {
        let (p1, p2) = (Point2f::new(x1, y1), Point2f::new(x2, y2));
        let trace = LineClipper::new(ClipWindow::DEFAULT).clip_traced(p1, p2);
        prop_assert_eq!(trace.result, Some((p1, p2)));
        prop_assert!(trace.is_trivial());
    }

    #[test]
    fn shared_outside_region_is_rejected(
        x1 in -200.0..99.0f64, y1 in window_coord(),
        x2 in -200.0..99.0f64, y2 in window_coord()
    ) {
        let window = ClipWindow::DEFAULT;
        let (p1, p2) = (Point2f::new(x1, y1), Point2f::new(x2, y2));
        prop_assert!(Outcode::compute(p1, &window).contains(Outcode::LEFT));
        prop_assert_eq!(LineClipper::new(window).clip(p1, p2), None);
    }
}
