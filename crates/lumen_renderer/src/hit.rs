//! Intersection record and the trait for objects rays can hit.

use lumen_math::{Ray, Vec3};

/// Squared distance stored in a fresh [`IntersectionInfo`]; any real hit is
/// closer than this.
pub const NO_HIT_DIST_SQ: f32 = 1e9;

/// Nearest intersection found so far along one ray.
///
/// Created per pixel and updated in place by successive intersection tests,
/// each of which only commits a hit strictly closer than the stored one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionInfo {
    /// Squared distance from the ray origin to the hit point
    pub dist_sq: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Surface parameterization
    pub u: f32,
    pub v: f32,
}

impl Default for IntersectionInfo {
    fn default() -> Self {
        Self {
            dist_sq: NO_HIT_DIST_SQ,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            u: 0.0,
            v: 0.0,
        }
    }
}

impl IntersectionInfo {
    /// Create an empty record (no hit yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any intersection has been committed.
    pub fn is_valid(&self) -> bool {
        self.dist_sq < NO_HIT_DIST_SQ
    }
}

/// Trait for objects that can be intersected by rays.
pub trait Intersectable: Send + Sync {
    /// Test `ray` against this object.
    ///
    /// Returns true and overwrites `info` only if the hit is strictly closer
    /// than the one already stored there.
    fn intersect(&self, ray: &Ray, info: &mut IntersectionInfo) -> bool;
}

impl<T: Intersectable> Intersectable for [T] {
    fn intersect(&self, ray: &Ray, info: &mut IntersectionInfo) -> bool {
        let mut hit_anything = false;
        for object in self {
            hit_anything |= object.intersect(ray, info);
        }
        hit_anything
    }
}

impl<T: Intersectable> Intersectable for Vec<T> {
    fn intersect(&self, ray: &Ray, info: &mut IntersectionInfo) -> bool {
        self.as_slice().intersect(ray, info)
    }
}
