//! Pixel surfaces.
//!
//! - [`Surface`]: the trait rasterized pixels are drawn through.
//! - [`Canvas`]: an owning CPU color buffer implementing it.

mod canvas;
mod surface;

pub use canvas::{Canvas, MAX_DIMENSION};
pub use surface::Surface;
