//! Lumen renderer - interactive single-sphere ray tracing.
//!
//! Casts one primary ray per pixel through a pinhole camera's virtual
//! sensor, intersects it with a sphere, and shades hits with Lambert + Phong
//! under a single point light. Frames are split into buckets and rendered
//! on a fixed-size worker pool into a flat RGB float buffer.

mod bucket;
mod camera;
mod error;
mod frame;
mod hit;
mod light;
mod pool;
mod renderer;
mod shading;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, MAX_FOV, MAX_PITCH, ZOOM_STEP};
pub use error::{RenderError, RenderResult};
pub use frame::{color_to_rgba, FrameBuffer};
pub use hit::{Intersectable, IntersectionInfo, NO_HIT_DIST_SQ};
pub use light::{LightOrbit, PointLight};
pub use pool::{available_workers, WorkerPool};
pub use renderer::{trace_pixel, FrameRenderer, FrameStats, RenderConfig, Scene};
pub use shading::LambertPhong;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Mat3, Mat3Ext, Ray, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;
