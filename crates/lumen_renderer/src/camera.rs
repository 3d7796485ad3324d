//! Pinhole camera with a virtual image sensor.
//!
//! The sensor is a rectangle one unit in front of the camera along its
//! "front" axis. Its size follows from the field of view (measured along the
//! sensor diagonal) and the aspect ratio. The three sensor corners are cached
//! in world space and rebuilt after every state change.
//!
//! Camera-local axes before rotation: right = +X, front = +Y, up = +Z.

use lumen_math::{Mat3, Mat3Ext, Ray, Vec3};

/// Largest field of view accepted by [`Camera::zoom_out`], in degrees.
pub const MAX_FOV: f32 = 180.0;

/// Pitch limit in degrees; the camera never flips over.
pub const MAX_PITCH: f32 = 90.0;

/// Fraction of the current field of view added or removed per zoom step.
pub const ZOOM_STEP: f32 = 0.01;

/// Camera for generating primary rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    width: u32,
    height: u32,
    fov: f32, // Diagonal field of view in degrees
    aspect: f32,

    // Orientation in degrees
    roll: f32,
    pitch: f32,
    yaw: f32,
    position: Vec3,
    locked: bool,

    // Cached computed values (rebuilt by recompute())
    sensor_width: f32,
    sensor_height: f32,
    right: Vec3,
    front: Vec3,
    up: Vec3,
    sensor_top_left: Vec3,
    sensor_top_right: Vec3,
    sensor_bottom_left: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    ///
    /// The sensor cache is only valid after [`Camera::init`].
    pub fn new() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 90.0,
            aspect: 640.0 / 480.0,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            position: Vec3::new(0.0, -3.0, 0.0),
            locked: false,
            sensor_width: 0.0,
            sensor_height: 0.0,
            right: Vec3::X,
            front: Vec3::Y,
            up: Vec3::Z,
            sensor_top_left: Vec3::ZERO,
            sensor_top_right: Vec3::ZERO,
            sensor_bottom_left: Vec3::ZERO,
        }
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov.min(MAX_FOV);
        self
    }

    /// Set the camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set roll, pitch and yaw in degrees. Pitch is clamped.
    pub fn with_rotation(mut self, roll: f32, pitch: f32, yaw: f32) -> Self {
        self.roll = roll;
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = yaw;
        self
    }

    /// Set the resolution and rebuild the sensor.
    ///
    /// Zero dimensions are not rejected; they produce a degenerate sensor.
    pub fn init(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.recompute();
    }

    /// Rebuild aspect ratio, sensor size, basis vectors and sensor corners
    /// from resolution, field of view, orientation and position.
    fn recompute(&mut self) {
        self.aspect = self.width as f32 / self.height as f32;

        let diag = (self.fov / 2.0).to_radians().tan();
        self.sensor_height = ((diag * diag) / (self.aspect * self.aspect + 1.0)).sqrt();
        self.sensor_width = self.sensor_height * self.aspect;

        let rotation = self.orientation();
        self.right = rotation.transform_row(Vec3::X);
        self.front = rotation.transform_row(Vec3::Y);
        self.up = rotation.transform_row(Vec3::Z);

        let (w, h) = (self.sensor_width, self.sensor_height);
        self.sensor_top_left = rotation.transform_row(Vec3::new(-w, 1.0, h)) + self.position;
        self.sensor_top_right = rotation.transform_row(Vec3::new(w, 1.0, h)) + self.position;
        self.sensor_bottom_left = rotation.transform_row(Vec3::new(-w, 1.0, -h)) + self.position;
    }

    /// Orientation matrix `Rx(pitch) * Ry(roll) * Rz(yaw)`.
    pub fn orientation(&self) -> Mat3 {
        Mat3::from_pitch_roll_yaw(self.pitch, self.roll, self.yaw)
    }

    /// Generate the primary ray through the top-left corner of pixel (x, y).
    pub fn get_camera_ray(&self, x: u32, y: u32) -> Ray {
        let w = x as f32 / self.width as f32;
        let h = y as f32 / self.height as f32;

        let hor_offset = w * (self.sensor_top_right - self.sensor_top_left);
        let ver_offset = h * (self.sensor_bottom_left - self.sensor_top_left);

        let direction = (self.sensor_top_left + hor_offset + ver_offset - self.position).normalize();
        Ray::primary(self.position, direction)
    }

    /// Add delta angles (degrees) to roll, pitch and yaw.
    ///
    /// Pitch is clamped to [-90, 90]; roll and yaw are left to wrap.
    pub fn rotate(&mut self, roll: f32, pitch: f32, yaw: f32) {
        if self.ignore_while_locked("rotate") {
            return;
        }
        self.roll += roll;
        self.pitch = (self.pitch + pitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw += yaw;
        self.recompute();
    }

    /// Move the camera to `position`.
    pub fn move_absolute(&mut self, position: Vec3) {
        if self.ignore_while_locked("move_absolute") {
            return;
        }
        self.position = position;
        self.recompute();
    }

    /// Move by `(right, front, up)` amounts along the camera's own axes.
    pub fn move_relative(&mut self, amount: Vec3) {
        if self.ignore_while_locked("move_relative") {
            return;
        }
        self.position += self.local_offset(amount);
        self.recompute();
    }

    /// Like [`Camera::move_relative`], but never changes the world Z
    /// coordinate, so looking up or down does not make the camera fly.
    pub fn move_game_like(&mut self, amount: Vec3) {
        if self.ignore_while_locked("move_game_like") {
            return;
        }
        let mut offset = self.local_offset(amount);
        offset.z = 0.0;
        self.position += offset;
        self.recompute();
    }

    fn local_offset(&self, amount: Vec3) -> Vec3 {
        let rotation = self.orientation();
        amount.x * rotation.transform_row(Vec3::X)
            + amount.y * rotation.transform_row(Vec3::Y)
            + amount.z * rotation.transform_row(Vec3::Z)
    }

    /// Narrow the field of view by 1% of its current value.
    pub fn zoom_in(&mut self) {
        if self.ignore_while_locked("zoom_in") {
            return;
        }
        self.fov -= self.fov * ZOOM_STEP;
        self.recompute();
    }

    /// Widen the field of view by 1% of its current value, up to 180 degrees.
    pub fn zoom_out(&mut self) {
        if self.ignore_while_locked("zoom_out") {
            return;
        }
        self.fov = (self.fov + self.fov * ZOOM_STEP).min(MAX_FOV);
        self.recompute();
    }

    /// Return to the origin with zero rotation.
    ///
    /// Resolution and field of view are kept.
    pub fn reset_defaults(&mut self) {
        if self.ignore_while_locked("reset_defaults") {
            return;
        }
        self.position = Vec3::ZERO;
        self.roll = 0.0;
        self.pitch = 0.0;
        self.yaw = 0.0;
        self.recompute();
    }

    /// Freeze the camera: mutators are ignored until [`Camera::unlock`].
    pub fn lock(&mut self) {
        self.locked = true;
        log::debug!("Camera locked");
    }

    pub fn unlock(&mut self) {
        self.locked = false;
        log::debug!("Camera unlocked");
    }

    pub fn toggle_lock(&mut self) {
        if self.locked {
            self.unlock();
        } else {
            self.lock();
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn ignore_while_locked(&self, operation: &str) -> bool {
        if self.locked {
            log::trace!("Camera is locked, ignoring {}", operation);
        }
        self.locked
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Viewing direction (same as [`Camera::front`]).
    pub fn direction(&self) -> Vec3 {
        self.front
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Half extents of the sensor rectangle (width, height).
    pub fn sensor_size(&self) -> (f32, f32) {
        (self.sensor_width, self.sensor_height)
    }

    pub fn sensor_top_left(&self) -> Vec3 {
        self.sensor_top_left
    }

    pub fn sensor_top_right(&self) -> Vec3 {
        self.sensor_top_right
    }

    pub fn sensor_bottom_left(&self) -> Vec3 {
        self.sensor_bottom_left
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
