//! Value types shared by the rasterizers and the clipper.

pub mod point;
pub mod window;

pub use point::{Point2, Point2f, Point2i};
pub use window::ClipWindow;
