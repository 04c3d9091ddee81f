//! Error types for rasterlab operations.
//!
//! The algorithmic core is total: rasterizers always produce pixels and a
//! rejected clip is `None`, not an error. Everything around it (surfaces,
//! viewport mapping, the SDL demo) reports failures through [`Error`].

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterlab operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument violated a documented precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A clip window whose minimum corner lies beyond its maximum corner.
    #[error("Invalid clip window: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidWindow {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },

    /// Zero-sized canvas or viewport, or a canvas too large to allocate.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Image encoding or file error while saving a snapshot.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Error reported by SDL as a plain string.
    #[error("SDL error: {0}")]
    Sdl(String),
}
