//! Shapes a scene can contain.

use tracer_math::{Ray, Vec3};

use crate::hittable::{Hit, Hittable, IntersectionInfo, SurfaceHit};
use crate::material::Material;
use crate::plane::Plane;
use crate::sphere::Sphere;

/// A sphere or an infinite plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => &sphere.material,
            Shape::Plane(plane) => &plane.material,
        }
    }

    /// Reference point of the shape: a sphere's centre, a plane's normal.
    pub fn position(&self) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.center,
            Shape::Plane(plane) => plane.normal,
        }
    }

    /// Intersect a single shape, recording it as the hit shape.
    pub fn intersect(&self, ray: &Ray) -> IntersectionInfo<'_> {
        IntersectionInfo {
            hit: self.hit(ray).map(|surface| Hit::new(surface, self)),
            hit_count: 0,
        }
    }
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Plane(plane) => plane.hit(ray),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
