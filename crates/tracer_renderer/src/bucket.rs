//! Bucket-based tile rendering.
//!
//! Divides the logical grid into tiles (buckets) that can be rendered
//! independently and in parallel using rayon.

use tracer_core::Scene;
use tracer_math::Color;

use crate::shading::Shader;
use crate::{ImageBuffer, RenderOptions, TraceStats};

/// A rectangular region of the logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in logical pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 16;

/// Split a `width x height` grid into row-major buckets.
///
/// Edge buckets are cropped to the grid. A zero `bucket_size` is treated
/// as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, options: &RenderOptions) -> BucketResult {
    let mut shader = Shader::new(scene, options);
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
    let mut checksum = 0;

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let (xp, yp) = options.device_coords(bucket.x + local_x, bucket.y + local_y);
            let ray = scene.camera.get_ray(xp, yp);
            let color = shader.pixel_color(&ray);
            checksum += color.brightness();
            pixels.push(color);
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        checksum,
        stats: shader.stats(),
    }
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
    /// Brightness sum of `pixels`
    pub checksum: i64,
    pub stats: TraceStats,
}

impl BucketResult {
    /// Copy the bucket's pixels to their place in a full-grid image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let bucket = &self.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = self.pixels[(local_y * bucket.width + local_x) as usize];
                image.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracer_core::presets::benchmark_scene;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(20, 20, 7);
        assert_eq!(buckets.len(), 9); // 3x3 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 20 * 20);

        let last = buckets.last().unwrap();
        assert_eq!((last.x, last.y, last.width, last.height), (14, 14, 6, 6));
        assert_eq!(last.index, 8);
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_bucket_checksum_matches_pixels() {
        let options = RenderOptions::benchmark();
        let scene = benchmark_scene();
        let bucket = Bucket::new(4, 6, 5, 3, 0);

        let result = render_bucket(&bucket, &scene, &options);
        assert_eq!(result.pixels.len(), 15);
        assert_eq!(result.checksum, result.pixels.iter().map(Color::brightness).sum::<i64>());
        assert_eq!(result.stats.primary_rays, 15);

        let mut image = ImageBuffer::new(20, 20);
        result.write_into(&mut image);
        assert_eq!(image.get(4, 6), result.pixels[0]);
        assert_eq!(image.get(8, 8), result.pixels[14]);
    }
}
