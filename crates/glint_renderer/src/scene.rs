//! Built-in scenes.

use crate::{ImageBuffer, RenderResult, Sphere, World};
use glint_math::{Colour, Point3};

/// The default scene: a small sphere in front of the camera resting on a
/// huge sphere that acts as the ground.
pub fn default_world() -> RenderResult<World> {
    let mut world = World::new();
    world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)?));
    world.add(Box::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0)?));

    log::trace!("Built default world with {} objects", world.len());
    Ok(world)
}

/// A test pattern that needs no tracing: red grows to the right, green
/// grows upward and blue is constant at 0.25.
///
/// Green is `(height - row) / (height - 1)`, so the top row overshoots 1.0
/// and is clamped to full green when written out. Dimensions below 2 are
/// treated as 2, since coordinates are normalized by `dimension - 1`.
pub fn demo_gradient(width: u32, height: u32) -> ImageBuffer {
    let width = width.max(2);
    let height = height.max(2);
    let mut image = ImageBuffer::new(width, height, 1);

    for row in 0..height {
        for x in 0..width {
            let r = x as f64 / (width - 1) as f64;
            let g = (height - row) as f64 / (height - 1) as f64;
            image.set(x, row, Colour::new(r, g, 0.25));
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pixel_colour, Hittable, Interval, Ray, Vector3};

    #[test]
    fn test_default_world() {
        let world = default_world().unwrap();
        assert_eq!(world.len(), 2);

        // Straight ahead hits the small sphere at t = 0.5
        let ahead = Ray::new(Point3::ZERO, Vector3::NEG_Z);
        let rec = world.hit(&ahead, Interval::from_min(0.0)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-9);

        // Straight down hits the ground just below the eye
        let down = Ray::new(Point3::ZERO, Vector3::NEG_Y);
        let rec = world.hit(&down, Interval::from_min(0.0)).unwrap();
        assert!(rec.front_face);
        assert!(rec.normal.y > 0.99);
    }

    #[test]
    fn test_default_world_sky() {
        let world = default_world().unwrap();
        let up = Ray::new(Point3::ZERO, Vector3::Y);
        assert_eq!(pixel_colour(&up, &world), Colour::new(0.5, 0.7, 1.0));
    }

    #[test]
    fn test_demo_gradient() {
        let image = demo_gradient(3, 3);

        assert_eq!(image.samples_per_pixel, 1);
        assert_eq!(image.pixels.len(), 9);
        assert_eq!(image.get(0, 2), Colour::new(0.0, 0.5, 0.25));
        assert_eq!(image.get(2, 2), Colour::new(1.0, 0.5, 0.25));
        assert_eq!(image.get(1, 1), Colour::new(0.5, 1.0, 0.25));
        assert_eq!(image.get(0, 0).y, 1.5);
    }

    #[test]
    fn test_demo_gradient_rows() {
        let image = demo_gradient(4, 4);

        // g = (h - row) / (h - 1) for h = 4
        let expected = [4.0 / 3.0, 1.0, 2.0 / 3.0, 1.0 / 3.0];
        for (row, g) in expected.into_iter().enumerate() {
            let actual = image.get(0, row as u32).y;
            assert!((actual - g).abs() < 1e-12, "row {row}: {actual} != {g}");
        }
    }

    #[test]
    fn test_demo_gradient_top_row_clamps() {
        let image = demo_gradient(2, 2);

        let mut bytes = Vec::new();
        crate::write_ppm(&image, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        // Top row g = 2.0 clamps to 255, bottom row g = 1.0
        assert_eq!(
            text,
            "P3\n2 2\n255\n0 255 63\n255 255 63\n0 255 63\n255 255 63\n"
        );
    }
}
