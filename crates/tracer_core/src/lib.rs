//! Tracer Core - scene entities for the recursive ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: `Solid`, `Checkerboard` and the `Material` enum over them
//! - **Shapes**: `Sphere`, `Plane` and the `Shape` enum, with local
//!   intersection via the `Hittable` trait
//! - **Scene graph**: `Scene`, `Camera`, `Light`, `Background`
//! - **Presets**: the benchmark scene and its expected checksum
//!
//! # Example
//!
//! ```ignore
//! use tracer_core::presets::benchmark_scene;
//!
//! let scene = benchmark_scene();
//! println!("{} shapes, {} lights", scene.shapes.len(), scene.lights.len());
//! ```

pub mod camera;
pub mod hittable;
pub mod light;
pub mod material;
pub mod plane;
pub mod presets;
pub mod scene;
pub mod shape;
pub mod sphere;

// Re-export commonly used types
pub use camera::Camera;
pub use hittable::{Hit, Hittable, IntersectionInfo, SurfaceHit, MISS_DISTANCE};
pub use light::Light;
pub use material::{wrap_up, Checkerboard, Material, Solid, SurfaceMaterial};
pub use plane::Plane;
pub use scene::{Background, Scene};
pub use shape::Shape;
pub use sphere::Sphere;
