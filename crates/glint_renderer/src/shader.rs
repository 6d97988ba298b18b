//! Pixel colour for a single camera ray.

use crate::Hittable;
use glint_math::{try_unit_vector, Colour, Interval, Ray, Vector3};

const WHITE: Colour = Colour::ONE;
const SKY_BLUE: Colour = Colour::new(0.5, 0.7, 1.0);

/// Compute the colour seen by a ray.
///
/// Surfaces are shaded by their normal; everything else sees the sky.
pub fn pixel_colour(ray: &Ray, world: &dyn Hittable) -> Colour {
    match world.hit(ray, Interval::from_min(0.0)) {
        Some(rec) => normal_colour(rec.normal),
        None => background(ray),
    }
}

/// Map a unit normal from [-1, 1] per axis to a displayable [0, 1] colour.
#[inline]
pub fn normal_colour(normal: Vector3) -> Colour {
    0.5 * (normal + Colour::ONE)
}

/// Vertical sky gradient: white looking down, blue looking up.
///
/// A zero-length direction has no "up" and is shaded as the horizon.
pub fn background(ray: &Ray) -> Colour {
    let y = try_unit_vector(ray.direction()).map_or(0.0, |unit_direction| unit_direction.y);
    let t = 0.5 * (y + 1.0);
    (1.0 - t) * WHITE + t * SKY_BLUE
}
