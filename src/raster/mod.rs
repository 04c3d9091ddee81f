//! Integer rasterization of lines and circles.
//!
//! Both rasterizers are pure functions returning the pixel sequence; drawing
//! it is left to a [`Surface`](crate::render::Surface).
//!
//! - [`line`]: Bresenham's line algorithm with exact horizontal, vertical and
//!   diagonal fast paths.
//! - [`circle`]: Bresenham's circle algorithm with 8-way symmetry.

pub mod circle;
pub mod line;

pub use circle::{rasterize_circle, try_rasterize_circle};
pub use line::{rasterize_line, rasterize_segment, rasterize_triangle_outline};
