//! Render driver.
//!
//! Walks the logical pixel grid row by row, shades one camera ray per
//! pixel and sums pixel brightness into the pass checksum.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracer_core::Scene;
use tracer_math::{Color, Ray};

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::shading::Shader;
use crate::{ImageBuffer, PixelSink, RenderError, RenderOptions, RenderResult, TraceStats};

/// Outcome of one render pass.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    /// Sum of `brightness()` over every rendered pixel
    pub checksum: i64,
    /// Logical pixels rendered
    pub pixels: u64,
    pub stats: TraceStats,
    pub elapsed: Duration,
}

/// Renders scenes with a fixed set of options.
#[derive(Debug, Clone)]
pub struct Engine {
    options: RenderOptions,
}

impl Engine {
    /// Create an engine, rejecting options with an empty grid.
    pub fn new(options: RenderOptions) -> RenderResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Camera ray through logical pixel (x, y).
    pub fn primary_ray(&self, scene: &Scene, x: u32, y: u32) -> Ray {
        let (xp, yp) = self.options.device_coords(x, y);
        scene.camera.get_ray(xp, yp)
    }

    /// Colour seen along one camera ray.
    pub fn pixel_color(&self, scene: &Scene, ray: &Ray) -> Color {
        Shader::new(scene, &self.options).pixel_color(ray)
    }

    /// Render every logical pixel into `sink`.
    pub fn render(&self, scene: &Scene, sink: &mut dyn PixelSink) -> RenderSummary {
        self.run(scene, Some(sink))
    }

    /// Render without a sink, keeping only the checksum.
    pub fn render_checksum(&self, scene: &Scene) -> RenderSummary {
        self.run(scene, None)
    }

    /// Render and compare the checksum with `expected`.
    pub fn render_verified(&self, scene: &Scene, expected: i64) -> RenderResult<RenderSummary> {
        let summary = self.render_checksum(scene);
        if summary.checksum != expected {
            log::warn!(
                "Checksum mismatch: expected {}, got {}",
                expected,
                summary.checksum
            );
            return Err(RenderError::VerificationFailed {
                expected,
                actual: summary.checksum,
            });
        }
        Ok(summary)
    }

    /// Render buckets in parallel into a logical-resolution image.
    ///
    /// The checksum is the sum of per-bucket checksums and matches a
    /// sequential pass.
    pub fn render_parallel(&self, scene: &Scene, bucket_size: u32) -> (ImageBuffer, RenderSummary) {
        let start = Instant::now();
        let (cols, rows) = self.options.grid_dimensions();
        let buckets = generate_buckets(cols, rows, bucket_size);

        log::info!(
            "Rendering {}x{} logical pixels in {} buckets",
            cols,
            rows,
            buckets.len()
        );

        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, scene, &self.options))
            .collect();

        let mut image = ImageBuffer::new(cols, rows);
        let mut checksum = 0;
        let mut stats = TraceStats::default();
        for result in &results {
            result.write_into(&mut image);
            checksum += result.checksum;
            stats = stats.merge(result.stats);
        }

        let summary = RenderSummary {
            checksum,
            pixels: cols as u64 * rows as u64,
            stats,
            elapsed: start.elapsed(),
        };
        log_summary(&summary);

        (image, summary)
    }

    fn run(&self, scene: &Scene, mut sink: Option<&mut dyn PixelSink>) -> RenderSummary {
        let start = Instant::now();
        let (cols, rows) = self.options.grid_dimensions();

        log::info!(
            "Rendering {}x{} logical pixels ({} shapes, {} lights)",
            cols,
            rows,
            scene.shapes.len(),
            scene.lights.len()
        );

        let mut shader = Shader::new(scene, &self.options);
        let mut checksum = 0;

        for y in 0..rows {
            for x in 0..cols {
                let ray = self.primary_ray(scene, x, y);
                let color = shader.pixel_color(&ray);
                if let Some(sink) = sink.as_deref_mut() {
                    sink.set_pixel(x, y, color);
                }
                checksum += color.brightness();
            }
        }

        let summary = RenderSummary {
            checksum,
            pixels: cols as u64 * rows as u64,
            stats: shader.stats(),
            elapsed: start.elapsed(),
        };
        log_summary(&summary);

        summary
    }
}

fn log_summary(summary: &RenderSummary) {
    log::info!(
        "Rendered {} pixels in {:?}, checksum {}",
        summary.pixels,
        summary.elapsed,
        summary.checksum
    );
    log::debug!("Trace stats: {:?}", summary.stats);
}
