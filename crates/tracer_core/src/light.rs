//! Point lights.

use tracer_math::{Color, Vec3};

/// Intensity given to lights created without one.
pub const DEFAULT_INTENSITY: f64 = 10.0;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    /// Carried with the light but not used by the shading model.
    pub intensity: f64,
}

impl Light {
    /// Create a light with [`DEFAULT_INTENSITY`].
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            intensity: DEFAULT_INTENSITY,
        }
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }
}
