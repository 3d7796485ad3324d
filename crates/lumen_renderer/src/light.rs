//! Point light and its per-frame orbit animation.

use crate::Color;
use lumen_math::Vec3;
use std::f32::consts::{PI, TAU};

/// A single point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Light color scaled by intensity.
    pub fn radiance(&self) -> Color {
        self.color * self.intensity
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, -10.0), Color::ONE, 50.0)
    }
}

/// Moves a light around a horizontal circle, one step per frame.
///
/// Driven by the display loop between frames, never during a render.
#[derive(Debug, Clone, Copy)]
pub struct LightOrbit {
    pub angle: f32,
    pub radius: f32,
    pub height: f32,
    pub step: f32,
}

impl LightOrbit {
    pub fn new(radius: f32, height: f32, step: f32) -> Self {
        Self {
            angle: 0.0,
            radius,
            height,
            step,
        }
    }

    /// Point on the orbit at the current angle.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.radius,
            self.angle.sin() * self.radius,
            self.height,
        )
    }

    /// Place `light` at the current angle, then advance the angle.
    pub fn advance(&mut self, light: &mut PointLight) {
        light.position = self.position();

        self.angle += self.step;
        if self.angle > TAU {
            self.angle = 0.0;
        }
    }
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self::new(5.0, -5.0, PI / 80.0)
    }
}
