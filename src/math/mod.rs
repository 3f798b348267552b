//! Small owned linear-algebra library.
//!
//! Column-major matrices with the column-vector convention (`M * v`), so a
//! [`Mat4`] can be written straight into a WGSL `mat4x4<f32>` uniform.
//! Angles passed to the rotation constructors are in degrees, matching the
//! units the camera controller accumulates.

mod mat3;
mod mat4;
mod vec;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use vec::{Vec3, Vec4};

/// Unit normal of the plane through three points.
///
/// Computed as `(p3 - p1) x (p2 - p1)`, so the winding that faces the
/// viewer is `p1, p3, p2`. Degenerate (collinear) input yields a zero
/// vector rather than NaNs.
#[must_use]
pub fn calc_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p3 - p1).cross(p2 - p1).normalize_or_zero()
}
