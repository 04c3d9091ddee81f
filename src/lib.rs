//! Computer-graphics fundamentals on a CPU pixel canvas.
//!
//! The core of this crate is three pure algorithms over integer and floating
//! point 2D points:
//!
//! - [`raster::rasterize_line`]: Bresenham line drawing.
//! - [`raster::rasterize_circle`]: Bresenham circle drawing with 8-way symmetry.
//! - [`clip::clip`]: Cohen–Sutherland line clipping against a [`ClipWindow`].
//!
//! Around them sit a [`Canvas`](render::Canvas) to draw pixels into, a
//! click-driven [`Exercise`] state machine, and an SDL2 [`Window`](window::Window)
//! used by the `rasterlab` demo binary.
//!
//! # Quick Start
//!
//! ```
//! use rasterlab::prelude::*;
//!
//! let pixels = rasterize_line(0, 0, 5, 2);
//! assert_eq!(pixels.len(), 6);
//!
//! let window = ClipWindow::new(100.0, 100.0, 400.0, 300.0).unwrap();
//! let visible = clip(Point2f::new(50.0, 150.0), Point2f::new(150.0, 200.0), &window);
//! assert_eq!(visible.map(|(a, _)| a.x), Some(100.0));
//! ```

// Public API - exposed to library consumers
pub mod clip;
pub mod colors;
pub mod config;
pub mod error;
pub mod exercise;
pub mod logging;
pub mod math;
pub mod raster;
pub mod render;
pub mod viewport;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use error::{Error, Result};
pub use exercise::{Drawing, Exercise, Mode};
pub use math::{ClipWindow, Point2, Point2f, Point2i};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rasterlab::prelude::*;
/// ```
pub mod prelude {
    // Core algorithms
    pub use crate::clip::{clip, LineClipper, Outcode};
    pub use crate::raster::{
        rasterize_circle, rasterize_line, rasterize_segment, rasterize_triangle_outline,
        try_rasterize_circle,
    };

    // Math
    pub use crate::math::{ClipWindow, Point2, Point2f, Point2i};

    // Rendering
    pub use crate::render::{Canvas, Surface};

    // Exercises
    pub use crate::exercise::{Drawing, Exercise, KeyAction, Mode};

    // Errors
    pub use crate::error::{Error, Result};
}
