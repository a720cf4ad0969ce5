//! Infinite one-sided plane.

use tracer_math::{Ray, Vec3};

use crate::hittable::{Hittable, SurfaceHit};
use crate::material::{Material, SurfaceMaterial};

/// The plane `normal · p + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal. Also reported as the hit normal and used as the
    /// plane's position by the highlight term.
    pub normal: Vec3,
    /// Signed offset from the origin
    pub d: f64,
    pub material: Material,
}

impl Plane {
    pub fn new(normal: Vec3, d: f64, material: impl Into<Material>) -> Self {
        Self {
            normal,
            d,
            material: material.into(),
        }
    }

    /// Texture coordinates of a point on the plane.
    ///
    /// Projects onto a basis derived from a permutation of the normal.
    pub fn uv(&self, position: Vec3) -> (f64, f64) {
        let n = self.normal;
        let v_u = Vec3::new(n.y, n.z, -n.x);
        let v_v = v_u.cross(n);
        (position.dot(v_u), position.dot(v_v))
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let vd = self.normal.dot(ray.direction);
        if vd == 0.0 {
            // Parallel
            return None;
        }

        let t = -(self.normal.dot(ray.origin) + self.d) / vd;
        if t <= 0.0 {
            return None;
        }

        let position = ray.at(t);
        let color = if self.material.has_texture() {
            let (u, v) = self.uv(position);
            self.material.color_at(u, v)
        } else {
            self.material.color_at(0.0, 0.0)
        };

        Some(SurfaceHit {
            distance: t,
            position,
            normal: self.normal,
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Checkerboard, Solid};
    use tracer_math::{Color, UnitVector};

    fn floor() -> Plane {
        // y = -1
        Plane::new(Vec3::Y, 1.0, Solid::new(Color::WHITE, 0.0, 0.0, 0.0, 0.0))
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let hit = floor().hit(&ray).expect("ray points at the plane");

        assert_eq!(hit.distance, 1.0);
        assert_eq!(hit.position, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(hit.color, Color::WHITE);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = floor();
        let origins = [Vec3::ZERO, Vec3::new(3.0, -1.0, 2.0), Vec3::new(0.0, -7.0, 0.0)];
        for origin in origins {
            assert!(plane.hit(&Ray::new(origin, Vec3::X)).is_none());
            assert!(plane.hit(&Ray::new(origin, Vec3::Z)).is_none());
        }
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(floor().hit(&ray).is_none());
    }

    #[test]
    fn test_origin_on_plane_misses() {
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(floor().hit(&ray).is_none());
    }

    #[test]
    fn test_textured_plane_samples_uv() {
        let normal = Vec3::new(0.1, 0.9, -0.5).unit();
        let board = Checkerboard::new(Color::WHITE, Color::BLACK, 0.2, 0.0, 1.0, 0.7);
        let plane = Plane::new(normal, 1.2, board);

        let ray = Ray::new(Vec3::new(2.0, 3.0, -4.0), Vec3::new(0.1, -1.0, 0.3).unit());
        let hit = plane.hit(&ray).expect("ray heads down onto the plane");

        let (u, v) = plane.uv(hit.position);
        assert_eq!(hit.color, board.color_at(u, v));
        // Hit point lies on the plane
        assert!((normal.dot(hit.position) + 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_uv_basis_is_orthogonal_to_normal() {
        let plane = Plane::new(
            Vec3::new(0.1, 0.9, -0.5).unit(),
            0.0,
            Solid::new(Color::WHITE, 0.0, 0.0, 0.0, 0.0),
        );
        // Points along the normal project to v = 0
        let (_, v) = plane.uv(plane.normal * 3.0);
        assert!(v.abs() < 1e-12);
    }
}
