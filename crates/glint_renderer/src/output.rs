//! Image output: plaintext PPM and PNG.
//!
//! Both formats share the same quantization so a pixel gets identical
//! channel values whichever file it lands in.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{ImageBuffer, RenderError, RenderResult};
use glint_math::{Colour, Interval};

/// Largest channel value written to the output.
pub const MAX_COLOUR: u32 = 255;

const CHANNEL_RANGE: Interval = Interval::new(0.0, MAX_COLOUR as f64);

/// Convert an accumulated channel sum to an 8-bit value.
///
/// Computes `floor(255 * channel_sum / samples)`, truncating rather than
/// rounding. Out-of-range values are clamped and NaN becomes 0.
#[inline]
pub fn quantize(channel_sum: f64, samples: u32) -> u8 {
    let value = MAX_COLOUR as f64 * channel_sum / samples as f64;
    // `as` truncates toward zero and maps NaN to 0
    CHANNEL_RANGE.clamp(value) as u8
}

fn quantize_colour(colour_sum: Colour, samples: u32) -> [u8; 3] {
    [
        quantize(colour_sum.x, samples),
        quantize(colour_sum.y, samples),
        quantize(colour_sum.z, samples),
    ]
}

/// Streaming writer for the plaintext `P3` format.
pub struct PpmWriter<W: Write> {
    writer: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the magic number, image size and maximum channel value.
    pub fn write_header(&mut self, width: u32, height: u32) -> std::io::Result<()> {
        writeln!(self.writer, "P3")?;
        writeln!(self.writer, "{} {}", width, height)?;
        writeln!(self.writer, "{}", MAX_COLOUR)
    }

    /// Write one pixel as an `R G B` line, averaging its accumulated samples.
    pub fn write_colour(&mut self, colour_sum: Colour, samples: u32) -> std::io::Result<()> {
        let [r, g, b] = quantize_colour(colour_sum, samples);
        writeln!(self.writer, "{} {} {}", r, g, b)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write a whole image as plaintext PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: W) -> RenderResult<()> {
    let mut ppm = PpmWriter::new(writer);
    ppm.write_header(image.width, image.height)?;

    for colour in &image.pixels {
        ppm.write_colour(*colour, image.samples_per_pixel)?;
    }

    ppm.flush()?;
    Ok(())
}

/// Save an image as a plaintext PPM file.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let file = File::create(path.as_ref())?;
    write_ppm(image, BufWriter::new(file))
}

/// Save an image as an 8-bit PNG file.
pub fn save_png(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let png = image::RgbImage::from_fn(image.width, image.height, |x, row| {
        image::Rgb(quantize_colour(image.get(x, row), image.samples_per_pixel))
    });
    png.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("ppm") => save_ppm(image, path),
        Some("png") => save_png(image, path),
        _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
    }
}
