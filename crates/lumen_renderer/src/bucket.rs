//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel on the worker pool.

use crate::renderer::{trace_pixel, Scene};
use crate::Color;

/// A rectangular region of the image to render.
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

    /// One past the last column covered by this bucket.
    pub fn x_end(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last row covered by this bucket.
    pub fn y_end(&self) -> u32 {
        self.y + self.height
    }

    /// Whether pixel (x, y) lies inside this bucket.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x_end() && y >= self.y && y < self.y_end()
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Generate buckets for an image in serpentine order.
///
/// Even bucket rows run left to right, odd rows right to left, so
/// consecutive buckets are always neighbours. Buckets on the right and
/// bottom borders are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    if bucket_size == 0 {
        return Vec::new();
    }

    let columns = width.div_ceil(bucket_size);
    let rows = height.div_ceil(bucket_size);
    let mut buckets = Vec::with_capacity((columns * rows) as usize);

    for row in 0..rows {
        let y = row * bucket_size;
        let bh = bucket_size.min(height - y);

        for step in 0..columns {
            let column = if row % 2 == 0 { step } else { columns - 1 - step };
            let x = column * bucket_size;
            let bw = bucket_size.min(width - x);
            let index = buckets.len();
            buckets.push(Bucket::new(x, y, bw, bh, index));
        }
    }

    log::debug!(
        "Generated {} buckets ({}x{}) for {}x{} image",
        buckets.len(),
        bucket_size,
        bucket_size,
        width,
        height
    );

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for y in bucket.y..bucket.y_end() {
        for x in bucket.x..bucket.x_end() {
            pixels.push(trace_pixel(scene, x, y));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count how many buckets cover each pixel.
    fn coverage(buckets: &[Bucket], width: u32, height: u32) -> Vec<u32> {
        let mut counts = vec![0u32; (width * height) as usize];
        for b in buckets {
            assert!(b.x_end() <= width && b.y_end() <= height, "bucket {:?} out of range", b);
            for y in b.y..b.y_end() {
                for x in b.x..b.x_end() {
                    counts[(y * width + x) as usize] += 1;
                }
            }
        }
        counts
    }

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
        let buckets = generate_buckets(100, 70, 32);
        assert_eq!(buckets.len(), 4 * 3);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);

        let corner = buckets.iter().find(|b| b.x == 96 && b.y == 64).unwrap();
        assert_eq!((corner.width, corner.height), (4, 6));
    }

    #[test]
    fn test_serpentine_order() {
        let buckets = generate_buckets(96, 96, 32);
        let order: Vec<(u32, u32)> = buckets.iter().map(|b| (b.x, b.y)).collect();

        assert_eq!(
            order,
            vec![
                (0, 0), (32, 0), (64, 0),
                (64, 32), (32, 32), (0, 32),
                (0, 64), (32, 64), (64, 64),
            ]
        );
        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.index, i);
        }
    }

    #[test]
    fn test_consecutive_buckets_are_neighbours() {
        let buckets = generate_buckets(300, 200, 32);
        for pair in buckets.windows(2) {
            let dx = (pair[0].x as i64 - pair[1].x as i64).abs();
            let dy = (pair[0].y as i64 - pair[1].y as i64).abs();
            assert!(dx + dy <= 32, "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_buckets_cover_canvas_exactly_once() {
        let sizes = [(1, 1), (31, 33), (64, 64), (640, 480), (257, 3), (5, 300)];
        for &(width, height) in &sizes {
            for bucket_size in [1, 7, 16, 32, 100] {
                let buckets = generate_buckets(width, height, bucket_size);
                let counts = coverage(&buckets, width, height);
                assert!(
                    counts.iter().all(|&c| c == 1),
                    "{}x{} / {} not covered exactly once",
                    width,
                    height,
                    bucket_size
                );
            }
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(generate_buckets(0, 100, 32).is_empty());
        assert!(generate_buckets(100, 0, 32).is_empty());
        assert!(generate_buckets(100, 100, 0).is_empty());
    }

    #[test]
    fn test_bucket_contains() {
        let bucket = Bucket::new(32, 64, 16, 8, 0);
        assert!(bucket.contains(32, 64));
        assert!(bucket.contains(47, 71));
        assert!(!bucket.contains(48, 64));
        assert!(!bucket.contains(32, 72));
    }
}
