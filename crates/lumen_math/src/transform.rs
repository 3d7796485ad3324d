// Rotation utilities for Mat3
//
// Extends glam::Mat3 with the row-vector conventions used by the camera:
// matrices are addressed as m[row][col] and vectors are transformed by
// right-multiplication (v * M). Angles are given in degrees.

use glam::{Mat3, Vec3};

/// Determinant magnitude below which a matrix is treated as singular.
pub const DETERMINANT_EPSILON: f32 = 1e-12;

/// Extension trait for Mat3 to provide rotation and row-vector utilities
pub trait Mat3Ext: Sized {
    /// Build a matrix from its three rows.
    fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self;

    /// Rotation about the X axis by `degrees`.
    fn rotate_around_x(degrees: f32) -> Self;

    /// Rotation about the Y axis by `degrees`.
    fn rotate_around_y(degrees: f32) -> Self;

    /// Rotation about the Z axis by `degrees`.
    fn rotate_around_z(degrees: f32) -> Self;

    /// Orientation matrix `Rx(pitch) * Ry(roll) * Rz(yaw)`.
    fn from_pitch_roll_yaw(pitch: f32, roll: f32, yaw: f32) -> Self;

    /// Element at `m[row][col]`.
    fn at(&self, row: usize, col: usize) -> f32;

    /// Transform a row vector: `v * M`.
    fn transform_row(&self, v: Vec3) -> Vec3;

    /// Inverse, or `None` when the matrix is singular.
    fn try_inverse(&self) -> Option<Self>;

    /// Inverse, or the matrix itself unchanged when it is singular.
    fn inverse_or_self(&self) -> Self;
}

impl Mat3Ext for Mat3 {
    fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Mat3::from_cols(r0, r1, r2).transpose()
    }

    fn rotate_around_x(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, cos, -sin),
            Vec3::new(0.0, sin, cos),
        )
    }

    fn rotate_around_y(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows(
            Vec3::new(cos, 0.0, sin),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-sin, 0.0, cos),
        )
    }

    fn rotate_around_z(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows(
            Vec3::new(cos, -sin, 0.0),
            Vec3::new(sin, cos, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    fn from_pitch_roll_yaw(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self::rotate_around_x(pitch) * Self::rotate_around_y(roll) * Self::rotate_around_z(yaw)
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.col(col)[row]
    }

    fn transform_row(&self, v: Vec3) -> Vec3 {
        // v * M == transpose(M) * v
        self.transpose() * v
    }

    fn try_inverse(&self) -> Option<Self> {
        if self.determinant().abs() < DETERMINANT_EPSILON {
            None
        } else {
            Some(self.inverse())
        }
    }

    fn inverse_or_self(&self) -> Self {
        self.try_inverse().unwrap_or(*self)
    }
}
