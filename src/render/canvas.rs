//! CPU pixel canvas.
//!
//! Owns an ARGB8888 color buffer that can be uploaded to an SDL streaming
//! texture as-is, or exported as a PNG snapshot.

use std::path::Path;

use log::info;

use super::surface::Surface;
use crate::colors;
use crate::error::{Error, Result};

/// Largest accepted width or height, the common SDL texture size limit.
pub const MAX_DIMENSION: u32 = 16_384;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas cleared to [`colors::BACKGROUND`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero or
    /// larger than [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if self.in_bounds(x, y) {
            Some(self.color_buffer[self.index(x, y)])
        } else {
            None
        }
    }

    /// Buffer index of an in-bounds pixel.
    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Count of pixels currently holding `color`.
    pub fn count_color(&self, color: u32) -> usize {
        self.color_buffer.iter().filter(|&&c| c == color).count()
    }

    /// The color buffer as raw bytes, in the native-endian ARGB8888 layout
    /// SDL streaming textures expect.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // slice covers exactly the buffer's bytes and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Copy the canvas into an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.color_buffer[self.index(x as i32, y as i32)];
            image::Rgba(colors::to_rgba_bytes(color))
        })
    }

    /// Save a snapshot; the format follows the file extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        info!("saved {}x{} snapshot to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: u32) {
        if self.in_bounds(x, y) {
            let index = self.index(x, y);
            self.color_buffer[index] = color;
        }
    }
}
