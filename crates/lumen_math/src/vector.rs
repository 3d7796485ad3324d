use glam::Vec3;

/// Extension trait for Vec3 with the shading helpers glam does not provide.
pub trait Vec3Ext {
    /// Mirror `self` about the plane with the given unit `normal`.
    ///
    /// Returns `self - 2 * dot(self, normal) * normal`.
    fn reflect_about(self, normal: Vec3) -> Vec3;

    /// Return `normal` oriented against `self`.
    fn face_forward(self, normal: Vec3) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn reflect_about(self, normal: Vec3) -> Vec3 {
        let cos = -self.dot(normal);
        self + normal * 2.0 * cos
    }

    #[inline]
    fn face_forward(self, normal: Vec3) -> Vec3 {
        if self.dot(normal) < 0.0 {
            normal
        } else {
            -normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_about_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = v.reflect_about(Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vec3::new(0.3, -0.8, 0.52).normalize();
        let n = Vec3::new(0.1, 1.0, -0.2).normalize();
        assert!((v.reflect_about(n).length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_face_forward() {
        let n = Vec3::Z;
        assert_eq!(Vec3::new(0.0, 0.0, -1.0).face_forward(n), n);
        assert_eq!(Vec3::new(0.0, 0.0, 1.0).face_forward(n), -n);
    }
}
