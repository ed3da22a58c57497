//! Raster buffer value types.
//!
//! Synthesis produces plain pixel buffers; encoding to a file format is a
//! separate step (see [`crate::png`]). Nothing here touches a rendering
//! surface.

use crate::color::Color;

/// Single-channel 8-bit intensity field (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityField {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Intensities, one byte per pixel.
    pub data: Vec<u8>,
}

impl IntensityField {
    /// Create a field filled with a value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get the intensity at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set the intensity at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = value;
    }

    /// Expand to an RGBA buffer with the intensity replicated across R/G/B
    /// and full opacity.
    pub fn to_texture_buffer(&self) -> TextureBuffer {
        let data = self
            .data
            .iter()
            .map(|&v| Color::gray(v as f64 / 255.0))
            .collect();
        TextureBuffer {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// A 2D RGBA texture buffer (row-major).
#[derive(Debug, Clone)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data.
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = color;
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}
