//! Marker bitmap loading
//!
//! The history markers are stamped from a small bitmap asset decoded once at
//! session start. Decode failures are fatal startup errors.

use std::path::Path;

use image::RgbaImage;

use crate::error::SessionError;

/// A decoded RGBA bitmap with known pixel dimensions
#[derive(Debug, Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Decode a bitmap from disk
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let pixels = image::open(path)
            .map_err(|err| {
                SessionError::ResourceUnavailable(format!(
                    "marker bitmap {}: {err}",
                    path.display()
                ))
            })?
            .to_rgba8();
        log::info!(
            "loaded marker bitmap {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self { pixels })
    }

    /// An opaque white placeholder, for headless runs and tests
    pub fn solid(width: u32, height: u32) -> Self {
        let pixels = RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
        Self { pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
