//! Camera for ray generation.

use tracer_math::{Ray, UnitVector, Vec3};

/// Pinhole camera looking through a screen at `position + look_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,

    // Derived at construction
    equator: Vec3,
    screen: Vec3,
}

impl Camera {
    /// Create a camera. `look_at` is a direction offset from `position`,
    /// not a target point; it must be non-zero.
    pub fn new(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self {
            position,
            look_at,
            up,
            equator: look_at.unit().cross(up),
            screen: position + look_at,
        }
    }

    /// Horizontal screen axis: `normalize(look_at) × up`.
    pub fn equator(&self) -> Vec3 {
        self.equator
    }

    /// Centre of the screen.
    pub fn screen(&self) -> Vec3 {
        self.screen
    }

    /// Ray through normalised device coordinates (vx, vy), each in [-1, 1).
    ///
    /// The ray starts on the screen, with y mirrored so that row 0 is the
    /// top of the image, and points away from the camera position.
    pub fn get_ray(&self, vx: f64, vy: f64) -> Ray {
        let mut pos = self.screen - (self.equator * vx - self.up * vy);
        pos.y = -pos.y;
        let dir = pos - self.position;
        Ray::new(pos, dir.unit())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_derived_vectors() {
        let camera = Camera::default();

        // Z x Y = -X
        assert_eq!(camera.equator(), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(camera.screen(), Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn test_center_ray() {
        let camera = Camera::default();
        let ray = camera.get_ray(0.0, 0.0);

        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_ray_directions_are_unit() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -15.0), Vec3::new(-0.2, 0.0, 5.0), Vec3::Y);
        for (vx, vy) in [(-1.0, -1.0), (0.5, -0.25), (0.9, 0.9), (0.0, 0.0)] {
            let ray = camera.get_ray(vx, vy);
            assert!((ray.direction.length() - 1.0).abs() < 1e-12);
            assert!(ray.direction.z > 0.0);
        }
    }

    #[test]
    fn test_y_is_flipped() {
        let camera = Camera::default();

        // Top row of the image (vy = -1) looks upward
        let top = camera.get_ray(0.0, -1.0);
        assert_eq!(top.origin.y, 1.0);
        assert!(top.direction.y > 0.0);

        let bottom = camera.get_ray(0.0, 0.5);
        assert!(bottom.direction.y < 0.0);
    }
}
