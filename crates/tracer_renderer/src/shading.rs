//! Recursive shading.
//!
//! Implements the lighting model:
//! - Ambient term from the background ambience
//! - Per-light diffuse, reflection, shadow and Phong highlight
//! - Reflection recursion bounded by `ray_depth`

use tracer_core::{Hit, IntersectionInfo, Scene, SurfaceMaterial};
use tracer_math::{Color, Ray, UnitVector, Vec3};

use crate::intersection::test_intersection;
use crate::{RenderOptions, TraceStats};

/// Mirror `v` about `n`, starting at `p`.
///
/// Not renormalised: unit `n` and `v` give a unit result.
pub fn reflection_ray(p: Vec3, n: Vec3, v: Vec3) -> Ray {
    let c1 = -n.dot(v);
    let r1 = n * (2.0 * c1) + v;
    Ray::new(p, r1)
}

/// Shades rays against one scene, counting the work it does.
pub struct Shader<'s> {
    scene: &'s Scene,
    options: &'s RenderOptions,
    stats: TraceStats,
}

impl<'s> Shader<'s> {
    pub fn new(scene: &'s Scene, options: &'s RenderOptions) -> Self {
        Self {
            scene,
            options,
            stats: TraceStats::default(),
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    /// Colour seen along a camera ray.
    ///
    /// Shades the nearest hit at depth 0, or returns the background colour.
    pub fn pixel_color(&mut self, ray: &Ray) -> Color {
        self.stats.primary_rays += 1;

        let info = test_intersection(ray, self.scene, None);
        match info.hit {
            Some(hit) => self.ray_trace(&hit, ray, 0),
            None => self.scene.background.color,
        }
    }

    /// Colour of a hit reached by `ray` after `depth` reflections.
    ///
    /// Lights are processed in scene order and each one can darken or
    /// brighten what the previous lights produced. Only the reflection
    /// branch looks at `depth`: it runs while `depth <= ray_depth`, so a
    /// camera ray is shaded at most `ray_depth + 2` levels deep.
    pub fn ray_trace(&mut self, info: &Hit<'s>, ray: &Ray, depth: u32) -> Color {
        self.stats.record_shade(depth);

        let scene = self.scene;
        let options = self.options;
        let shape = info.shape;
        let material = shape.material();

        // Ambient
        let mut color = info.color * scene.background.ambience;
        let shininess = 10f64.powf(material.gloss() + 1.0);

        for light in &scene.lights {
            let v = (light.position - info.position).unit();

            if options.render_diffuse {
                let l = v.dot(info.normal);
                if l > 0.0 {
                    color = color + info.color * (light.color * l);
                }
            }

            if depth <= options.ray_depth && options.render_reflections && material.reflection() > 0.0 {
                let reflected_ray = reflection_ray(info.position, info.normal, ray.direction);
                self.stats.reflection_rays += 1;

                let refl = test_intersection(&reflected_ray, scene, Some(shape));
                let reflected = match refl.hit {
                    Some(hit) if hit.distance > 0.0 => self.ray_trace(&hit, &reflected_ray, depth + 1),
                    _ => scene.background.color,
                };

                color = color.blend(reflected, material.reflection());
            }

            // Reset for every light; the highlight below only looks at this light's test.
            let mut shadow = IntersectionInfo::miss();
            if options.render_shadows {
                let shadow_ray = Ray::new(info.position, v);
                self.stats.shadow_rays += 1;

                shadow = test_intersection(&shadow_ray, scene, Some(shape));
                if let Some(blocker) = shadow.shape() {
                    if !std::ptr::eq(blocker, shape) {
                        let va = color * 0.5;
                        let db = 0.5 * blocker.material().transparency().sqrt();
                        color = va.add_scalar(db);
                    }
                }
            }

            // Phong highlight, measured from the shape's position rather than the hit point
            if options.render_highlights && !shadow.is_hit() && material.gloss() > 0.0 {
                let lv = (shape.position() - light.position).unit();
                let e = (scene.camera.position - shape.position()).unit();
                let h = (e - lv).unit();

                let gloss_weight = info.normal.dot(h).max(0.0).powf(shininess);
                color = light.color * gloss_weight + color;
            }
        }

        color.limit();
        color
    }
}
