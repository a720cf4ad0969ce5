//! Sphere primitive for ray tracing.

use tracer_math::{Ray, UnitVector, Vec3};

use crate::hittable::{Hittable, SurfaceHit};
use crate::material::{Material, SurfaceMaterial};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: impl Into<Material>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

impl Hittable for Sphere {
    /// Near root of the ray/sphere quadratic.
    ///
    /// A tangent ray (zero discriminant) is a miss, as is a NaN
    /// discriminant from a degenerate ray. The near root is
    /// returned even when it lies behind the origin.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let dst = ray.origin - self.center;

        let b = dst.dot(ray.direction);
        let c = dst.dot(dst) - self.radius * self.radius;
        let d = b * b - c;

        if !(d > 0.0) {
            return None;
        }

        let distance = -b - d.sqrt();
        let position = ray.at(distance);

        Some(SurfaceHit {
            distance,
            position,
            normal: (position - self.center).unit(),
            color: self.material.color_at(0.0, 0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Checkerboard;
    use crate::Solid;
    use tracer_math::Color;

    fn sphere() -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Solid::new(Color::new(0.0, 0.5, 0.5), 0.3, 0.0, 0.0, 2.0),
        )
    }

    #[test]
    fn test_sphere_hit_through_center() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = sphere().hit(&ray).expect("ray through center must hit");

        // Nearer of the roots 4 and 6
        assert!((hit.distance - 4.0).abs() < 1e-12);
        assert!((hit.position - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-12);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert_eq!(hit.color, Color::new(0.0, 0.5, 0.5));
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere().hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_tangent_is_miss() {
        // Grazes the sphere at (1, 0, 5): discriminant is exactly zero
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere().hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_nan_ray_is_miss() {
        let ray = Ray::new(Vec3::new(f64::NAN, 0.0, 0.0), Vec3::Z);
        assert!(sphere().hit(&ray).is_none());

        // Zero direction normalises to NaN
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO.unit());
        assert!(sphere().hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_reports_negative_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        let hit = sphere().hit(&ray).expect("line still crosses the sphere");
        assert!((hit.distance + 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_samples_texture_at_origin() {
        let board = Checkerboard::new(Color::WHITE, Color::BLACK, 0.0, 0.0, 0.0, 0.7);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, board);
        let hit = sphere.hit(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.color, board.color_at(0.0, 0.0));
    }
}
