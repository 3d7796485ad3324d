//! Sphere primitive for ray tracing.

use crate::hit::{Intersectable, IntersectionInfo};
use lumen_math::{Ray, Vec3};
use std::f32::consts::PI;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_pos(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Get the UV coordinates for a unit normal.
    fn get_sphere_uv(n: Vec3) -> (f32, f32) {
        let u = 0.5 + n.y.atan2(n.x) / (2.0 * PI);
        let v = 0.5 + n.z.clamp(-1.0, 1.0).asin() / PI;
        (u, v)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }
}

impl Intersectable for Sphere {
    /// Solves `(D.D) x^2 + 2 (H.D) x + (H.H - r^2) = 0` with `H = S - O`,
    /// which follows from substituting `P = S + D x` into `|P - O|^2 = r^2`.
    fn intersect(&self, ray: &Ray, info: &mut IntersectionInfo) -> bool {
        let s = ray.origin;
        let d = ray.direction;
        let h = s - self.center;

        let a = d.dot(d);
        let b = 2.0 * h.dot(d);
        let c = h.dot(h) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();
        let far = (-b + sqrtd) / (2.0 * a);
        let near = (-b - sqrtd) / (2.0 * a);

        // Prefer the nearer root unless it is behind the origin
        let root = if near >= 0.0 { near } else { far };
        if root < 0.0 {
            return false;
        }

        let point = ray.at(root);
        let dist_sq = (point - s).length_squared();
        if dist_sq >= info.dist_sq {
            return false;
        }

        let normal = (point - self.center) / self.radius;
        let (u, v) = Self::get_sphere_uv(normal);

        info.dist_sq = dist_sq;
        info.point = point;
        info.normal = normal;
        info.u = u;
        info.v = v;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::primary(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut info = IntersectionInfo::new();

        assert!(sphere.intersect(&ray, &mut info));
        assert!(info.is_valid());
        assert!(approx_eq(info.point, Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx_eq(info.normal, Vec3::new(0.0, 0.0, -1.0)));
        assert!((info.dist_sq - 16.0).abs() < 1e-4);
        assert!((info.u - 0.5).abs() < 1e-5);
        assert!(info.v.abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::primary(Vec3::new(0.0, 3.0, -5.0), Vec3::Z);
        let mut info = IntersectionInfo::new();

        assert!(!sphere.intersect(&ray, &mut info));
        assert_eq!(info, IntersectionInfo::default());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);

        // Origin outside, pointing away
        let ray = Ray::primary(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        let mut info = IntersectionInfo::new();

        assert!(!sphere.intersect(&ray, &mut info));
        assert!(!info.is_valid());
    }

    #[test]
    fn test_ray_from_inside_hits_far_wall() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::primary(Vec3::ZERO, Vec3::X);
        let mut info = IntersectionInfo::new();

        assert!(sphere.intersect(&ray, &mut info));
        assert!(approx_eq(info.point, Vec3::new(2.0, 0.0, 0.0)));
        assert!(approx_eq(info.normal, Vec3::X));
        assert!((info.dist_sq - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_off_origin_normal() {
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 2.0);
        let ray = Ray::primary(Vec3::ZERO, Vec3::X);
        let mut info = IntersectionInfo::new();

        assert!(sphere.intersect(&ray, &mut info));
        assert!(approx_eq(info.point, Vec3::new(8.0, 0.0, 0.0)));
        assert!(approx_eq(info.normal, Vec3::new(-1.0, 0.0, 0.0)));
        assert!((info.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_wins_in_either_order() {
        let near = Sphere::new(Vec3::ZERO, 1.0);
        let far = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::primary(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        let mut near_first = IntersectionInfo::new();
        assert!(near.intersect(&ray, &mut near_first));
        assert!(!far.intersect(&ray, &mut near_first));

        let mut far_first = IntersectionInfo::new();
        assert!(far.intersect(&ray, &mut far_first));
        assert!((far_first.dist_sq - 81.0).abs() < 1e-3);
        assert!(near.intersect(&ray, &mut far_first));

        assert_eq!(near_first, far_first);
        assert!((near_first.dist_sq - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_equal_distance_does_not_overwrite() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::primary(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut info = IntersectionInfo::new();

        assert!(sphere.intersect(&ray, &mut info));
        assert!(!sphere.intersect(&ray, &mut info));
    }

    #[test]
    fn test_sphere_list() {
        let spheres = vec![
            Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0),
            Sphere::new(Vec3::ZERO, 1.0),
        ];
        let ray = Ray::primary(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut info = IntersectionInfo::new();

        assert!(spheres.intersect(&ray, &mut info));
        assert!(approx_eq(info.point, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_setters() {
        let mut sphere = Sphere::default();
        sphere.set_pos(Vec3::ONE);
        sphere.set_radius(3.0);
        assert_eq!(sphere.center(), Vec3::ONE);
        assert_eq!(sphere.radius(), 3.0);
    }
}
