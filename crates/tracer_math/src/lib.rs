// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

/// Double precision 3D vector used for all scene geometry.
///
/// Tracing runs in f64 so the brightness checksum of a render is stable.
pub type Vec3 = DVec3;

// Tracer math types
mod color;
mod ray;
pub use color::Color;
pub use ray::Ray;

/// Normalisation by division through the magnitude.
///
/// glam's `normalize` multiplies by the reciprocal length, which rounds
/// differently; every direction in the tracer goes through this instead.
pub trait UnitVector {
    /// Divide each component by the magnitude.
    ///
    /// A zero vector has no direction: the result is NaN in every
    /// component and callers must not pass one.
    fn unit(self) -> Self;
}

impl UnitVector for DVec3 {
    #[inline]
    fn unit(self) -> Self {
        self / self.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_unit_has_magnitude_one() {
        let vectors = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(0.1, 0.9, -0.5),
            Vec3::new(-0.2, 0.0, 5.0),
            Vec3::new(1e-3, -7.0, 250.0),
        ];
        for v in vectors {
            assert!((v.unit().length() - 1.0).abs() < 1e-12, "{v:?}");
        }
    }

    #[test]
    fn test_unit_divides_by_magnitude() {
        let v = Vec3::new(0.1, 0.9, -0.5);
        let m = (0.1f64 * 0.1 + 0.9 * 0.9 + 0.5 * 0.5).sqrt();
        let u = v.unit();
        assert_eq!(u.x, 0.1 / m);
        assert_eq!(u.y, 0.9 / m);
        assert_eq!(u.z, -0.5 / m);
    }

    #[test]
    fn test_unit_of_zero_is_nan() {
        let u = Vec3::ZERO.unit();
        assert!(u.x.is_nan() && u.y.is_nan() && u.z.is_nan());
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let pairs = [
            (Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 2.0)),
            (Vec3::new(0.1, 0.9, -0.5), Vec3::new(0.9, -0.5, -0.1)),
            (Vec3::new(-0.2, 0.0, 5.0), Vec3::Y),
        ];
        for (v, w) in pairs {
            assert!(v.dot(v.cross(w)).abs() < 1e-9);
            assert!(w.dot(v.cross(w)).abs() < 1e-9);
        }
    }
}
