//! Geometric value types shared by the controllers.
//!
//! Positions and directions are plain [`glam::Vec3`] values and rotations are
//! [`glam::Quat`] (identity by default). The helpers here add the few
//! interpolation primitives the controllers need on top of glam.

pub use glam::{Quat as Quaternion, Vec3 as Vector3};

/// Linear interpolation from `a` toward `b` by factor `t`.
#[inline]
#[must_use]
pub fn lerp_vec3(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    a + (b - a) * t
}

/// Per-component linear interpolation between two quaternions.
///
/// This is intentionally NOT a spherical interpolation: the result is not
/// renormalized and does not follow the great-circle arc. Callers that need
/// a unit rotation should use [`Quaternion::slerp`] instead.
#[inline]
#[must_use]
pub fn lerp_quat(a: Quaternion, b: Quaternion, t: f32) -> Quaternion {
    Quaternion::from_xyzw(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
        a.w + (b.w - a.w) * t,
    )
}
