//! Tracer Renderer - recursive Whitted-style ray tracing
//!
//! Shades hits with ambient, diffuse, shadow, specular highlight and
//! recursive reflection terms, each of which can be switched off.
//! Every pass produces a brightness checksum used to verify a render.

mod bucket;
mod error;
mod image;
mod intersection;
mod options;
mod renderer;
mod shading;
mod stats;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use image::{Canvas, ImageBuffer, PixelSink};
pub use intersection::test_intersection;
pub use options::{RenderOptions, MAX_CANVAS_SIDE};
pub use renderer::{Engine, RenderSummary};
pub use shading::{reflection_ray, Shader};
pub use stats::TraceStats;

/// Re-export scene and math types used in the public API
pub use tracer_core::{Hit, IntersectionInfo, Scene};
pub use tracer_math::{Color, Ray, Vec3};
