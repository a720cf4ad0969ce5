//! Nearest-hit search over a scene.

use tracer_core::{IntersectionInfo, Scene, Shape};
use tracer_math::Ray;

/// Find the nearest hit of `ray` against every shape except `exclude`.
///
/// Linear scan in scene order. A candidate replaces the current best only
/// if its distance is non-negative and strictly smaller, so the earlier
/// shape wins an exact tie. Nothing farther than [`tracer_core::MISS_DISTANCE`] is
/// reported. `exclude` is compared by identity and keeps secondary rays
/// from hitting the surface they start on.
pub fn test_intersection<'s>(ray: &Ray, scene: &'s Scene, exclude: Option<&Shape>) -> IntersectionInfo<'s> {
    let mut best = IntersectionInfo::miss();
    let mut hits = 0;

    for shape in &scene.shapes {
        if exclude.is_some_and(|excluded| std::ptr::eq(excluded, shape)) {
            continue;
        }

        let info = shape.intersect(ray);
        if let Some(hit) = info.hit {
            if hit.distance >= 0.0 && hit.distance < best.distance() {
                best = info;
                hits += 1;
            }
        }
    }

    best.hit_count = hits;
    best
}
