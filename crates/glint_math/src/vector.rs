//! Vector, point and colour aliases.

use glam::DVec3;

/// A displacement in 3D space.
pub type Vector3 = DVec3;

/// A location in 3D space.
pub type Point3 = DVec3;

/// Linear RGB colour, channels nominally in [0, 1].
pub type Colour = DVec3;

/// Scale `v` to unit length.
///
/// A zero-length input divides by zero and yields non-finite components.
/// Use [`try_unit_vector`] when that has to be caught.
#[inline]
pub fn unit_vector(v: Vector3) -> Vector3 {
    v / v.length()
}

/// Scale `v` to unit length, or `None` if its length is zero or not finite.
#[inline]
pub fn try_unit_vector(v: Vector3) -> Option<Vector3> {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        Some(v / length)
    } else {
        None
    }
}
