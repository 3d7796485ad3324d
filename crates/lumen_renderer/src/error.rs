//! Errors from setting up the renderer.
//!
//! Ray generation, intersection and shading never fail; only the frame
//! renderer's plumbing does.

use thiserror::Error;

/// Errors that can occur while creating or resizing a frame renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Bucket size must be at least 1 pixel")]
    InvalidBucketSize,
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
