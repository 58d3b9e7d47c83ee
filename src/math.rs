//! Math type aliases and helper functions.
//!
//! Thin f32 aliases over `nalgebra`, plus conversions to and from the
//! plain arrays used at the scene boundary.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Convert a vector to a plain `[x, y, z]` array.
pub fn vec3_to_array(v: Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

/// Create a vector from a plain `[x, y, z]` array.
pub fn vec3_from_array(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}
