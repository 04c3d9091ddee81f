//! The drawing seam between pixel producers and pixel sinks.

use crate::math::{ClipWindow, Point2f, Point2i};
use crate::raster::rasterize_segment;

/// Anything that can light up individual pixels.
///
/// Rasterizers hand their output to a surface; implementors decide how a
/// pixel is stored or shown. Out-of-bounds pixels must be ignored, not
/// treated as errors.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Set a single pixel. Silently ignores out-of-bounds coordinates.
    fn plot(&mut self, x: i32, y: i32, color: u32);

    /// Plot a pixel sequence in order.
    fn plot_points(&mut self, points: &[Point2i], color: u32) {
        for p in points {
            self.plot(p.x, p.y, color);
        }
    }

    /// Whether `(x, y)` lies on the surface.
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() as i32 && y >= 0 && y < self.height() as i32
    }

    /// Outline a clip window, snapping its corners to the pixel grid.
    fn draw_window_outline(&mut self, window: &ClipWindow, color: u32) {
        let corners = [
            Point2f::new(window.x_min(), window.y_min()).round(),
            Point2f::new(window.x_max(), window.y_min()).round(),
            Point2f::new(window.x_max(), window.y_max()).round(),
            Point2f::new(window.x_min(), window.y_max()).round(),
        ];
        for i in 0..corners.len() {
            let edge = rasterize_segment(corners[i], corners[(i + 1) % corners.len()]);
            self.plot_points(&edge, color);
        }
    }
}
