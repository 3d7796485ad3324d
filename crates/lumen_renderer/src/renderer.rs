//! Frame renderer.
//!
//! Per pixel: the camera produces a primary ray, the sphere is intersected,
//! and hits are shaded with Lambert + Phong against the scene's point light.
//! Misses get the background color. Frames are rendered bucket by bucket on
//! a worker pool.

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::error::{RenderError, RenderResult};
use crate::frame::FrameBuffer;
use crate::pool::WorkerPool;
use crate::{Camera, Color, Intersectable, IntersectionInfo, LambertPhong, PointLight, Sphere};
use std::time::{Duration, Instant};

/// Frame renderer configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of the square buckets in pixels
    pub bucket_size: u32,
    /// Worker count; `None` uses one worker per hardware thread
    pub num_threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            num_threads: None,
        }
    }
}

impl RenderConfig {
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }
}

/// Everything a frame is rendered from.
///
/// Owned by the driver and only borrowed immutably while a frame is in
/// flight; mutate it between frames.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub sphere: Sphere,
    pub light: PointLight,
    /// Surface color of the sphere
    pub base_color: Color,
    /// Color of pixels whose ray hits nothing
    pub background: Color,
    pub shading: LambertPhong,
}

impl Scene {
    /// Default scene around `camera`: a red unit sphere at the origin lit
    /// by the default point light over a dark gray background.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            sphere: Sphere::default(),
            light: PointLight::default(),
            base_color: Color::new(1.0, 0.0, 0.0),
            background: Color::ONE * 0.3,
            shading: LambertPhong::default(),
        }
    }
}

/// Compute the color of pixel (x, y).
pub fn trace_pixel(scene: &Scene, x: u32, y: u32) -> Color {
    let ray = scene.camera.get_camera_ray(x, y);
    let mut info = IntersectionInfo::new();
    scene.sphere.intersect(&ray, &mut info);

    if info.is_valid() {
        scene
            .shading
            .shade(scene.base_color, &info, &scene.light, scene.camera.position())
    } else {
        scene.background
    }
}

/// Timing and size of one rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    pub elapsed: Duration,
    pub buckets: usize,
    pub pixels: usize,
}

/// Renders frames bucket by bucket into an owned frame buffer.
pub struct FrameRenderer {
    pool: WorkerPool,
    bucket_size: u32,
    buckets: Vec<Bucket>,
    frame: FrameBuffer,
}

impl FrameRenderer {
    /// Create a renderer for a `width` x `height` canvas.
    pub fn new(width: u32, height: u32, config: &RenderConfig) -> RenderResult<Self> {
        validate(width, height, config.bucket_size)?;

        let pool = WorkerPool::new(config.num_threads)?;
        let buckets = generate_buckets(width, height, config.bucket_size);

        Ok(Self {
            pool,
            bucket_size: config.bucket_size,
            buckets,
            frame: FrameBuffer::new(width, height),
        })
    }

    /// Reallocate the frame buffer and rebuild the bucket list.
    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        validate(width, height, self.bucket_size)?;

        self.buckets = generate_buckets(width, height, self.bucket_size);
        self.frame = FrameBuffer::new(width, height);
        log::info!("Canvas resized to {}x{}", width, height);
        Ok(())
    }

    /// Render one frame of `scene`. Blocks until every bucket is done.
    pub fn render_frame(&mut self, scene: &Scene) -> FrameStats {
        let start = Instant::now();

        if (scene.camera.width(), scene.camera.height()) != (self.frame.width(), self.frame.height()) {
            log::warn!(
                "Camera resolution {}x{} does not match canvas {}x{}",
                scene.camera.width(),
                scene.camera.height(),
                self.frame.width(),
                self.frame.height()
            );
        }

        let buckets = &self.buckets;
        let results = self.pool.map(buckets.len(), |index| {
            let bucket = buckets[index];
            BucketResult::new(bucket, render_bucket(&bucket, scene))
        });

        for result in &results {
            self.frame.write_bucket(result);
        }

        let stats = FrameStats {
            elapsed: start.elapsed(),
            buckets: results.len(),
            pixels: self.frame.pixels().len(),
        };
        log::debug!("Frame rendered in {:.4} seconds", stats.elapsed.as_secs_f64());
        stats
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn num_threads(&self) -> usize {
        self.pool.num_threads()
    }
}

fn validate(width: u32, height: u32, bucket_size: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }
    if bucket_size == 0 {
        return Err(RenderError::InvalidBucketSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn scene(width: u32, height: u32) -> Scene {
        let mut camera = Camera::new();
        camera.init(width, height);
        Scene::new(camera)
    }

    #[test]
    fn test_center_pixel_hits_sphere() {
        let scene = scene(64, 48);
        let color = trace_pixel(&scene, 32, 24);
        assert_ne!(color, scene.background);
        // Light sits behind the visible hemisphere; only red ambient remains
        assert!(color.x > color.y);
    }

    #[test]
    fn test_corner_pixel_misses_sphere() {
        let scene = scene(64, 48);
        assert_eq!(trace_pixel(&scene, 0, 0), scene.background);
    }

    #[test]
    fn test_render_frame_writes_every_pixel() {
        let mut scene = scene(37, 23);
        // Pick a background no shaded pixel can produce
        scene.background = Color::new(-1.0, -1.0, -1.0);

        let config = RenderConfig::default().with_bucket_size(8).with_threads(3);
        let mut renderer = FrameRenderer::new(37, 23, &config).unwrap();
        let stats = renderer.render_frame(&scene);

        assert_eq!(stats.buckets, 5 * 3);
        assert_eq!(stats.pixels, 37 * 23);
        for y in 0..23 {
            for x in 0..37 {
                assert_eq!(renderer.frame().get(x, y), trace_pixel(&scene, x, y));
            }
        }
        assert!(renderer.frame().pixels().iter().any(|&c| c != scene.background));
        assert!(renderer.frame().pixels().iter().any(|&c| c == scene.background));
    }

    #[test]
    fn test_single_and_multi_threaded_frames_match() {
        let mut scene = scene(120, 90);
        scene.camera.rotate(3.0, -7.0, 11.0);
        scene.light.position = Vec3::new(4.0, -3.0, -5.0);

        let config = RenderConfig::default().with_bucket_size(16);
        let mut single = FrameRenderer::new(120, 90, &config.clone().with_threads(1)).unwrap();
        let mut multi = FrameRenderer::new(120, 90, &config.with_threads(6)).unwrap();

        single.render_frame(&scene);
        multi.render_frame(&scene);

        let a: Vec<u32> = single.frame().as_floats().iter().map(|f| f.to_bits()).collect();
        let b: Vec<u32> = multi.frame().as_floats().iter().map(|f| f.to_bits()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resize_rebuilds_buckets() {
        let config = RenderConfig::default().with_threads(2);
        let mut renderer = FrameRenderer::new(64, 64, &config).unwrap();
        assert_eq!(renderer.buckets().len(), 4);

        renderer.resize(100, 40).unwrap();
        assert_eq!(renderer.buckets().len(), 4 * 2);
        assert_eq!((renderer.frame().width(), renderer.frame().height()), (100, 40));
    }

    #[test]
    fn test_invalid_setup_is_rejected() {
        let config = RenderConfig::default().with_threads(1);
        assert!(matches!(
            FrameRenderer::new(0, 10, &config),
            Err(RenderError::InvalidResolution { width: 0, height: 10 })
        ));

        let config = config.with_bucket_size(0);
        assert!(matches!(
            FrameRenderer::new(10, 10, &config),
            Err(RenderError::InvalidBucketSize)
        ));
    }

    #[test]
    fn test_num_threads() {
        let renderer = FrameRenderer::new(8, 8, &RenderConfig::default().with_threads(2)).unwrap();
        assert_eq!(renderer.num_threads(), 2);
    }
}
