//! Glint math types.
//!
//! Vectors, points and colours all share `glam::DVec3`; the aliases only
//! document intent at the call site.

// Re-export glam for convenience
pub use glam::DVec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{try_unit_vector, unit_vector, Colour, Point3, Vector3};
