// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod ray;
mod transform;
mod vector;

pub use ray::Ray;
pub use transform::{Mat3Ext, DETERMINANT_EPSILON};
pub use vector::Vec3Ext;
