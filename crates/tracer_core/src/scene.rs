//! Scene graph types.
//!
//! A scene is built once and then only read while rendering, so it can be
//! shared across render threads.

use tracer_math::Color;

use crate::camera::Camera;
use crate::light::Light;
use crate::shape::Shape;

/// Colour for rays that escape the scene, and the ambient weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub color: Color,
    /// Scales the material colour to give the ambient term at every hit
    pub ambience: f64,
}

impl Background {
    pub fn new(color: Color, ambience: f64) -> Self {
        Self { color, ambience }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new(Color::new(0.0, 0.0, 0.5), 0.2)
    }
}

/// Camera, shapes, lights and background.
///
/// Shapes and lights are kept in insertion order; the order decides which
/// shape wins an exact distance tie and the order lights are accumulated.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub camera: Camera,
    pub shapes: Vec<Shape>,
    pub lights: Vec<Light>,
    pub background: Background,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, background: Background) -> Self {
        Self {
            camera,
            shapes: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Add a shape to the scene.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Builder form of [`Scene::add_shape`].
    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.add_shape(shape);
        self
    }

    /// Builder form of [`Scene::add_light`].
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
