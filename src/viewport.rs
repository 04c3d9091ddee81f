//! Mapping between pixel space and normalized device coordinates.
//!
//! Pixel space has its origin in the top-left corner with y growing down.
//! NDC spans `[-1, 1]` on both axes with y growing up:
//!
//! ```text
//! (0, 0) ----------- (w, 0)        (-1, 1) ---------- (1, 1)
//!   |                  |      =>      |                  |
//! (0, h) ----------- (w, h)        (-1,-1) ---------- (1,-1)
//! ```

use crate::error::{Error, Result};
use crate::math::{Point2f, Point2i};

/// Convert a pixel to NDC for a `width` x `height` viewport.
///
/// # Errors
/// Returns [`Error::InvalidDimensions`] if either dimension is zero.
pub fn pixel_to_ndc(p: Point2i, width: u32, height: u32) -> Result<(f32, f32)> {
    check_dimensions(width, height)?;
    Ok(to_ndc(p, width as f32, height as f32))
}

/// Convert a whole pixel sequence to NDC, preserving order.
pub fn points_to_ndc(points: &[Point2i], width: u32, height: u32) -> Result<Vec<(f32, f32)>> {
    check_dimensions(width, height)?;
    let (w, h) = (width as f32, height as f32);
    Ok(points.iter().map(|&p| to_ndc(p, w, h)).collect())
}

/// Snap a pointer position to the pixel grid.
pub fn snap_click(x: f64, y: f64) -> Point2i {
    Point2f::new(x, y).round()
}

/// Radius of the circle centered at `center` passing through `rim`, in whole
/// pixels.
pub fn radius_from_points(center: Point2i, rim: Point2i) -> u32 {
    center.to_f64().distance(rim.to_f64()).round() as u32
}

#[inline]
fn to_ndc(p: Point2i, width: f32, height: f32) -> (f32, f32) {
    let x = (p.x as f32 / width) * 2.0 - 1.0;
    let y = ((height - p.y as f32) / height) * 2.0 - 1.0;
    (x, y)
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}
