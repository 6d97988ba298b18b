//! Hittable trait and HitRecord for ray-object intersection.

use glint_math::{Interval, Point3, Ray, Vector3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal at intersection (always points against the ray)
    pub normal: Vector3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record from the geometric outward normal.
    ///
    /// The stored normal always faces against the ray, so a ray leaving the
    /// surface from inside gets the negated normal and `front_face == false`.
    pub fn with_face_normal(ray: &Ray, t: f64, p: Point3, outward_normal: Vector3) -> Self {
        // Same direction as the outward normal means we started inside
        let front_face = ray.direction().dot(outward_normal) <= 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the closed interval `ray_t`.
    ///
    /// Returns the nearest intersection in range, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
