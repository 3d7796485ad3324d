//! Lambert + Phong shading with a single point light.

use crate::{Color, IntersectionInfo, PointLight};
use lumen_math::{Vec3, Vec3Ext};

/// Offset along the normal applied to the hit point before measuring the
/// distance to the light.
const SURFACE_OFFSET: f32 = 1e-6;

/// Shading parameters for the Lambert + Phong model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertPhong {
    /// Fraction of the base color always present, regardless of lighting
    pub ambient: f32,
    /// Phong specular exponent
    pub shininess: f32,
}

impl Default for LambertPhong {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            shininess: 30.0,
        }
    }
}

impl LambertPhong {
    pub fn new(ambient: f32, shininess: f32) -> Self {
        Self { ambient, shininess }
    }

    /// Shade a hit seen from `eye` and lit by `light`.
    ///
    /// Combines `ambient + (diffuse + specular) * (1 - ambient)`, where the
    /// diffuse term falls off with the squared distance to the light and the
    /// specular term does not. No shadow rays are cast.
    pub fn shade(
        &self,
        base: Color,
        info: &IntersectionInfo,
        light: &PointLight,
        eye: Vec3,
    ) -> Color {
        let radiance = light.radiance();
        let to_light = (light.position - info.point).normalize();

        let from = info.point + info.normal * SURFACE_OFFSET;
        let dist_sq = (from - light.position).length_squared();
        let cos_theta = to_light.dot(info.normal).max(0.0);
        let diffuse = base * radiance * cos_theta / dist_sq;

        let reflected = to_light.reflect_about(info.normal);
        let view_dir = (info.point - eye).normalize();
        let factor = reflected.dot(view_dir).max(0.0);
        let specular = radiance * factor.powf(self.shininess);

        let ambient = base * self.ambient;
        ambient + (diffuse + specular) * (1.0 - self.ambient)
    }
}
