//! Gradient raster standing in for a rendered index image.

use crate::palette::Palette;
use crate::VmonError;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Overlay raster width in pixels.
pub const OVERLAY_WIDTH: u32 = 800;
/// Overlay raster height in pixels.
pub const OVERLAY_HEIGHT: u32 = 600;

/// An RGBA8 pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Fill a `width` x `height` raster with a linear gradient running from
    /// the top-left corner to the bottom-right corner.
    ///
    /// Each pixel center is projected onto the diagonal, matching how a 2D
    /// canvas evaluates `createLinearGradient(0, 0, width, height)`.
    pub fn diagonal_gradient(palette: &Palette, width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let length_sq = w * w + h * h;
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let t = if length_sq > 0.0 {
                    ((f64::from(x) + 0.5) * w + (f64::from(y) + 0.5) * h) / length_sq
                } else {
                    0.0
                };
                let color = palette.color_at(t);
                pixels.extend_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, VmonError> {
        let image = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| VmonError::Encoding("pixel buffer does not match raster size".into()))?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
