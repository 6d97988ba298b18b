//! Render driver.
//!
//! Walks every pixel of the image, traces one or more camera rays through it
//! and accumulates the shaded colours:
//! - Rows top to bottom, columns left to right
//! - Anti-aliasing via jittered multi-sampling
//! - Sums are kept undivided until output

use std::time::Instant;

use crate::{gen_f64, pixel_colour, Camera, Hittable, RenderError, RenderResult};
use glint_math::Colour;
use rand::RngCore;

/// Image and sampling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Image width in pixels
    pub image_width: u32,
    /// Image height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
}

impl RenderSettings {
    pub const DEFAULT_IMAGE_WIDTH: u32 = 400;
    pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 100;

    /// Settings for an image `image_width` pixels wide, with the height
    /// derived from the aspect ratio (truncated).
    pub fn with_aspect_ratio(image_width: u32, aspect_ratio: f64, samples_per_pixel: u32) -> Self {
        Self {
            image_width,
            image_height: (image_width as f64 / aspect_ratio) as u32,
            samples_per_pixel,
        }
    }

    /// Check the settings can be rendered.
    ///
    /// Pixel coordinates are normalized by `dimension - 1`, so both
    /// dimensions need at least two pixels.
    pub fn validate(&self) -> RenderResult<()> {
        if self.image_width < 2 || self.image_height < 2 {
            return Err(RenderError::InvalidSettings(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether samples are jittered within their pixel.
    ///
    /// A single sample goes through the exact pixel position, which keeps
    /// one-sample renders deterministic.
    pub fn jitter(&self) -> bool {
        self.samples_per_pixel > 1
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::with_aspect_ratio(
            Self::DEFAULT_IMAGE_WIDTH,
            Camera::DEFAULT_ASPECT_RATIO,
            Self::DEFAULT_SAMPLES_PER_PIXEL,
        )
    }
}

/// Accumulated pixel colours in output order.
///
/// `pixels[0]` is the top-left pixel; rows run top to bottom. Each entry is
/// the sum of `samples_per_pixel` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub pixels: Vec<Colour>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32, samples_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            samples_per_pixel,
            pixels: vec![Colour::ZERO; width as usize * height as usize],
        }
    }

    /// Index into `pixels` for column `x` of row `row`, counted from the top.
    fn index(&self, x: u32, row: u32) -> usize {
        row as usize * self.width as usize + x as usize
    }

    /// Accumulated colour at column `x`, row `row` (counted from the top).
    pub fn get(&self, x: u32, row: u32) -> Colour {
        self.pixels[self.index(x, row)]
    }

    /// Set the accumulated colour at column `x`, row `row` (counted from the top).
    pub fn set(&mut self, x: u32, row: u32, colour: Colour) {
        let index = self.index(x, row);
        self.pixels[index] = colour;
    }

    /// Averaged colour at column `x`, row `row` (counted from the top).
    pub fn average(&self, x: u32, row: u32) -> Colour {
        self.get(x, row) / self.samples_per_pixel as f64
    }
}

/// Render a single pixel, returning the sum of all its samples.
///
/// `x` counts columns from the left and `y` rows from the bottom.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> RenderResult<Colour> {
    settings.validate()?;
    Ok(accumulate_pixel(camera, world, x, y, settings, rng))
}

/// Sum the samples of one pixel. `settings` must already be validated.
fn accumulate_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Colour {
    let x_scale = (settings.image_width - 1) as f64;
    let y_scale = (settings.image_height - 1) as f64;
    let jitter = settings.jitter();

    let mut pixel_colour_sum = Colour::ZERO;

    for _ in 0..settings.samples_per_pixel {
        let (dx, dy) = if jitter {
            (gen_f64(rng), gen_f64(rng))
        } else {
            (0.0, 0.0)
        };

        let x_proportion = (x as f64 + dx) / x_scale;
        let y_proportion = (y as f64 + dy) / y_scale;

        let ray = camera.get_ray(x_proportion, y_proportion);
        pixel_colour_sum += pixel_colour(&ray, world);
    }

    pixel_colour_sum
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; randomness for jitter comes only from `rng`.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> RenderResult<ImageBuffer> {
    settings.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp",
        settings.image_width,
        settings.image_height,
        settings.samples_per_pixel
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(
        settings.image_width,
        settings.image_height,
        settings.samples_per_pixel,
    );

    for y in (0..settings.image_height).rev() {
        log::debug!("Scanlines remaining: {}", y + 1);
        let row = settings.image_height - 1 - y;

        for x in 0..settings.image_width {
            let colour = accumulate_pixel(camera, world, x, y, settings, rng);
            image.set(x, row, colour);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}
