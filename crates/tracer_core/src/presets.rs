//! Built-in scenes.

use tracer_math::{Color, UnitVector, Vec3};

use crate::{Background, Camera, Checkerboard, Light, Plane, Scene, Solid, Sphere};

/// Checksum of [`benchmark_scene`] rendered on a 100x100 canvas with 5x5
/// pixel blocks, every lighting term enabled and a ray depth of 2.
pub const BENCHMARK_CHECKSUM: i64 = 55545;

/// Two spheres over a checkerboard plane, lit by two lights.
pub fn benchmark_scene() -> Scene {
    let camera = Camera::new(
        Vec3::new(0.0, 0.0, -15.0),
        Vec3::new(-0.2, 0.0, 5.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let background = Background::new(Color::new(0.5, 0.5, 0.5), 0.4);

    let plane = Plane::new(
        Vec3::new(0.1, 0.9, -0.5).unit(),
        1.2,
        Checkerboard::new(Color::WHITE, Color::BLACK, 0.2, 0.0, 1.0, 0.7),
    );
    let teal = Sphere::new(
        Vec3::new(-1.5, 1.5, 2.0),
        1.5,
        Solid::new(Color::new(0.0, 0.5, 0.5), 0.3, 0.0, 0.0, 2.0),
    );
    let white = Sphere::new(
        Vec3::new(1.0, 0.25, 1.0),
        0.5,
        Solid::new(Color::new(0.9, 0.9, 0.9), 0.1, 0.0, 0.0, 1.5),
    );

    let scene = Scene::new(camera, background)
        .with_shape(plane)
        .with_shape(teal)
        .with_shape(white)
        .with_light(Light::new(Vec3::new(5.0, 10.0, -1.0), Color::new(0.8, 0.8, 0.8)))
        .with_light(Light::new(Vec3::new(-3.0, 5.0, -15.0), Color::new(0.8, 0.8, 0.8)).with_intensity(100.0));

    log::debug!(
        "Built benchmark scene: {} shapes, {} lights",
        scene.shape_count(),
        scene.light_count()
    );

    scene
}
