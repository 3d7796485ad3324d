//! Frame buffer handed to the display stage.

use crate::bucket::BucketResult;
use crate::Color;

/// Row-major RGB frame buffer.
///
/// Pixels are stored as `Color` values, which share the layout of three
/// packed `f32`s, so the whole buffer can be uploaded directly as a flat
/// `width * height * 3` float array.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Flat RGB float view: `[r0, g0, b0, r1, g1, b1, ...]`.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Raw bytes of the float view, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy a rendered bucket into its region of the buffer.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        debug_assert_eq!(result.pixels.len(), bucket.pixel_count() as usize);

        let row_len = bucket.width as usize;
        for (row, src) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = self.offset(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + row_len].copy_from_slice(src);
        }
    }

    /// Convert to RGBA bytes, clamping each channel to [0, 1].
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Convert a color to 8-bit RGBA without gamma correction.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, 255]
}
