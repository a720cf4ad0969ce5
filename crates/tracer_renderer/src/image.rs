//! Pixel sinks: where rendered colours go.

use tracer_math::Color;

use crate::{RenderOptions, RenderResult};

/// Receives one colour per logical pixel.
///
/// Coordinates are logical grid positions; sinks that produce physical
/// pixels scale them by the pixel block size themselves.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Image buffer at logical resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Sum of pixel brightness.
    pub fn checksum(&self) -> i64 {
        self.pixels.iter().map(Color::brightness).sum()
    }

    /// Convert to RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

impl PixelSink for ImageBuffer {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}

/// RGBA surface at physical resolution.
///
/// Each logical pixel fills a `pixel_width x pixel_height` block, clipped
/// at the canvas edge.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixel_width: u32,
    pixel_height: u32,
    rgba: Vec<u8>,
}

impl Canvas {
    /// Create an opaque black canvas sized by the options.
    ///
    /// Fails with [`crate::RenderError::InvalidOptions`] when the buffer size
    /// does not fit in `usize`.
    pub fn new(options: &RenderOptions) -> RenderResult<Self> {
        let mut rgba = vec![0; options.rgba_len()?];
        for alpha in rgba.iter_mut().skip(3).step_by(4) {
            *alpha = 255;
        }

        Ok(Self {
            width: options.canvas_width,
            height: options.canvas_height,
            pixel_width: options.pixel_width,
            pixel_height: options.pixel_height,
            rgba,
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Colour of the physical pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

impl PixelSink for Canvas {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let rgba = color.to_rgba8();
        let x0 = x.saturating_mul(self.pixel_width);
        let y0 = y.saturating_mul(self.pixel_height);
        let x1 = x0.saturating_add(self.pixel_width).min(self.width);
        let y1 = y0.saturating_add(self.pixel_height).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.offset(px, py);
                self.rgba[i..i + 4].copy_from_slice(&rgba);
            }
        }
    }
}
