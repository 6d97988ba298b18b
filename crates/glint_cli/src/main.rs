//! Glint command line renderer.
//!
//! Renders the default two-sphere scene and writes it as PPM to stdout or
//! to a `.ppm` / `.png` file.

mod cli;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{
    default_world, demo_gradient, render, save_image, write_ppm, Camera, ImageBuffer,
    RenderSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Glint");

    let image = if args.demo {
        build_demo(&args)
    } else {
        render_scene(&args)?
    };

    match &args.output {
        Some(path) => {
            save_image(&image, path)
                .with_context(|| format!("Failed to save image to {}", path.display()))?;
            log::info!("Saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_ppm(&image, BufWriter::new(stdout.lock()))
                .context("Failed to write image to stdout")?;
        }
    }

    Ok(())
}

fn render_scene(args: &Args) -> Result<ImageBuffer> {
    let camera = Camera::new();
    let settings =
        RenderSettings::with_aspect_ratio(args.width, camera.aspect_ratio(), args.samples);
    settings.validate().context("Invalid command line settings")?;

    let world = default_world().context("Failed to build scene")?;

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let image = render(&camera, &world, &settings, &mut rng).context("Render failed")?;
    Ok(image)
}

fn build_demo(args: &Args) -> ImageBuffer {
    let settings = RenderSettings::with_aspect_ratio(args.width, Camera::DEFAULT_ASPECT_RATIO, 1);
    log::info!(
        "Writing {}x{} gradient test pattern",
        settings.image_width,
        settings.image_height
    );
    demo_gradient(settings.image_width, settings.image_height)
}
