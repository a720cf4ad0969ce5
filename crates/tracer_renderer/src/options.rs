//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{RenderError, RenderResult};

/// Largest accepted canvas side in physical pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// Render configuration.
///
/// Deserialises from camelCase JSON; any field left out keeps its default,
/// so a partial document is merged over [`RenderOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Output width in physical pixels
    pub canvas_width: u32,
    /// Output height in physical pixels
    pub canvas_height: u32,
    /// Width of one logical pixel block
    pub pixel_width: u32,
    /// Height of one logical pixel block
    pub pixel_height: u32,
    pub render_diffuse: bool,
    pub render_shadows: bool,
    pub render_highlights: bool,
    pub render_reflections: bool,
    /// Deepest bounce that may still spawn a reflection ray
    pub ray_depth: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_width: 100,
            canvas_height: 100,
            pixel_width: 2,
            pixel_height: 2,
            render_diffuse: false,
            render_shadows: false,
            render_highlights: false,
            render_reflections: false,
            ray_depth: 2,
        }
    }
}

impl RenderOptions {
    /// The configuration the benchmark checksum is defined for.
    pub fn benchmark() -> Self {
        Self {
            canvas_width: 100,
            canvas_height: 100,
            pixel_width: 5,
            pixel_height: 5,
            ..Self::default()
        }
        .with_all_features()
    }

    /// Enable diffuse, shadows, highlights and reflections.
    pub fn with_all_features(mut self) -> Self {
        self.render_diffuse = true;
        self.render_shadows = true;
        self.render_highlights = true;
        self.render_reflections = true;
        self
    }

    /// Parse options from JSON and validate them.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let options: RenderOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file and validate them.
    pub fn from_json_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that the grid has a non-zero size and the canvas fits in memory.
    pub fn validate(&self) -> RenderResult<()> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(RenderError::InvalidOptions(format!(
                "pixel block must be at least 1x1, got {}x{}",
                self.pixel_width, self.pixel_height
            )));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(RenderError::InvalidOptions(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.canvas_width > MAX_CANVAS_SIDE || self.canvas_height > MAX_CANVAS_SIDE {
            return Err(RenderError::InvalidOptions(format!(
                "canvas must be at most {MAX_CANVAS_SIDE}x{MAX_CANVAS_SIDE}, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        self.rgba_len()?;
        Ok(())
    }

    /// Byte length of an RGBA buffer covering the canvas.
    pub fn rgba_len(&self) -> RenderResult<usize> {
        (self.canvas_width as usize)
            .checked_mul(self.canvas_height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                RenderError::InvalidOptions(format!(
                    "canvas {}x{} is too large to allocate",
                    self.canvas_width, self.canvas_height
                ))
            })
    }

    /// Logical grid size, `canvas / pixel` without rounding.
    pub fn grid_size(&self) -> (f64, f64) {
        (
            self.canvas_width as f64 / self.pixel_width as f64,
            self.canvas_height as f64 / self.pixel_height as f64,
        )
    }

    /// Number of logical columns and rows rendered.
    ///
    /// A partial block at the right or bottom edge still gets a pixel.
    pub fn grid_dimensions(&self) -> (u32, u32) {
        let (width, height) = self.grid_size();
        (width.ceil() as u32, height.ceil() as u32)
    }

    /// Normalised device coordinates of logical pixel (x, y).
    ///
    /// Maps `0..size` onto `[-1, 1)` using the unrounded grid size.
    pub fn device_coords(&self, x: u32, y: u32) -> (f64, f64) {
        let (width, height) = self.grid_size();
        let xp = x as f64 / width * 2.0 - 1.0;
        let yp = y as f64 / height * 2.0 - 1.0;
        (xp, yp)
    }
}
