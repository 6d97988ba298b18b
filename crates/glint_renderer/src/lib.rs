//! Glint Renderer - CPU sphere ray tracing
//!
//! Casts one or more rays per pixel from a pinhole camera into a world of
//! spheres and shades each hit by its surface normal. Misses fall back to a
//! vertical sky gradient. Output is a plaintext PPM (or PNG) image.

mod camera;
mod error;
mod hittable;
mod output;
mod renderer;
mod scene;
mod shader;
mod sphere;
mod world;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use output::{quantize, save_image, save_png, save_ppm, write_ppm, PpmWriter, MAX_COLOUR};
pub use renderer::{render, render_pixel, ImageBuffer, RenderSettings};
pub use scene::{default_world, demo_gradient};
pub use shader::{background, normal_colour, pixel_colour};
pub use sphere::Sphere;
pub use world::World;

/// Re-export the math types from glint_math
pub use glint_math::{Colour, Interval, Point3, Ray, Vector3};

use rand::{Rng, RngCore};

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}
