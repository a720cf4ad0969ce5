//! Hittable trait and intersection records.

use tracer_math::{Color, Ray, Vec3};

use crate::shape::Shape;

/// Distance reported by a miss.
///
/// Larger than any plausible scene extent; it is a search bound, not a
/// measured distance.
pub const MISS_DISTANCE: f64 = 2000.0;

/// Intersection data computed by a single primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter t along the ray. Spheres report negative values for
    /// surfaces behind the origin; the scene scan filters them.
    pub distance: f64,
    /// World-space hit point
    pub position: Vec3,
    /// Surface normal. Unit for spheres, the stored normal for planes.
    pub normal: Vec3,
    /// Material colour sampled at the hit
    pub color: Color,
}

/// Trait for primitives that can be hit by rays.
///
/// The ray direction must be unit length.
pub trait Hittable: Send + Sync {
    /// Nearest intersection along the ray, or `None` on a miss.
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit>;
}

/// A hit tied to the shape that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub distance: f64,
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Color,
    pub shape: &'a Shape,
}

impl<'a> Hit<'a> {
    pub fn new(surface: SurfaceHit, shape: &'a Shape) -> Self {
        Self {
            distance: surface.distance,
            position: surface.position,
            normal: surface.normal,
            color: surface.color,
            shape,
        }
    }
}

/// Result of intersecting a ray with one shape or a whole scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionInfo<'a> {
    /// The nearest hit, if any
    pub hit: Option<Hit<'a>>,
    /// How many times a scene scan found a nearer hit. Diagnostic only.
    pub hit_count: usize,
}

impl<'a> IntersectionInfo<'a> {
    /// A miss.
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }

    /// Distance of the hit, or [`MISS_DISTANCE`].
    pub fn distance(&self) -> f64 {
        self.hit.map_or(MISS_DISTANCE, |hit| hit.distance)
    }

    /// The shape that was hit.
    pub fn shape(&self) -> Option<&'a Shape> {
        self.hit.map(|hit| hit.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Solid, Sphere};

    #[test]
    fn test_miss_reports_sentinel_distance() {
        let info = IntersectionInfo::miss();
        assert!(!info.is_hit());
        assert_eq!(info.distance(), MISS_DISTANCE);
        assert_eq!(info.hit_count, 0);
        assert!(info.shape().is_none());
    }

    #[test]
    fn test_hit_keeps_shape_reference() {
        let shape = Shape::from(Sphere::new(
            Vec3::ZERO,
            1.0,
            Solid::new(Color::WHITE, 0.0, 0.0, 0.0, 0.0),
        ));
        let surface = SurfaceHit {
            distance: 4.0,
            position: Vec3::new(0.0, 0.0, -1.0),
            normal: Vec3::new(0.0, 0.0, -1.0),
            color: Color::WHITE,
        };
        let info = IntersectionInfo {
            hit: Some(Hit::new(surface, &shape)),
            hit_count: 1,
        };

        assert!(info.is_hit());
        assert_eq!(info.distance(), 4.0);
        assert!(std::ptr::eq(info.shape().unwrap(), &shape));
    }
}
