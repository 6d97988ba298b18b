//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    RenderError, RenderResult,
};
use glint_math::{Interval, Point3, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails for a zero, negative or non-finite radius, which would divide
    /// by zero when normalizing hit normals.
    pub fn new(center: Point3, radius: f64) -> RenderResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::DegenerateSphere { radius });
        }

        Ok(Self { center, radius })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::with_face_normal(ray, root, p, outward_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vector3;

    const EPSILON: f64 = 1e-9;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5).unwrap()
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::from_min(0.0)).expect("should hit");

        assert!((rec.t - 0.5).abs() < EPSILON);
        assert!(rec.front_face);
        // Normal points from the center back toward the ray origin
        assert!((rec.normal - Vector3::Z).length() < EPSILON);
        assert!((rec.p - Point3::new(0.0, 0.0, -0.5)).length() < EPSILON);
    }

    #[test]
    fn test_sphere_hit_unnormalized_direction() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, -4.0));

        let rec = sphere.hit(&ray, Interval::from_min(0.0)).unwrap();
        assert!((rec.t - 0.125).abs() < EPSILON);
        assert!((rec.normal.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 1.0, 0.0));

        let rec = sphere.hit(&ray, Interval::from_min(0.0)).expect("should hit");

        assert!(!rec.front_face);
        assert!((rec.t - 0.5).abs() < EPSILON);
        // Outward normal is +Y, stored normal faces back against the ray
        assert!((rec.normal - Vector3::NEG_Y).length() < EPSILON);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_ahead();

        // Ray pointing away from sphere
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::from_min(0.0)).is_none());

        // Parallel ray passing beside it
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::from_min(0.0)).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_out_of_range() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, 1.0));

        // Both roots are negative
        assert!(sphere.hit(&ray, Interval::from_min(0.0)).is_none());
        assert!(sphere.hit(&ray, Interval::UNIVERSE).is_some());
    }

    #[test]
    fn test_sphere_falls_back_to_far_root() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, -1.0));

        // Near root at 0.5 is excluded, far root at 1.5 is not
        let rec = sphere.hit(&ray, Interval::new(1.0, 2.0)).unwrap();
        assert!((rec.t - 1.5).abs() < EPSILON);
        assert!(!rec.front_face);

        assert!(sphere.hit(&ray, Interval::new(0.6, 1.4)).is_none());
    }

    #[test]
    fn test_sphere_interval_is_inclusive() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.0, 0.5)).unwrap();
        assert_eq!(rec.t, 0.5);
    }

    #[test]
    fn test_sphere_zero_direction_misses() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ZERO, Vector3::ZERO);
        assert!(sphere.hit(&ray, Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_degenerate_sphere_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Sphere::new(Point3::ZERO, radius);
            assert!(matches!(result, Err(RenderError::DegenerateSphere { .. })));
        }
    }
}
