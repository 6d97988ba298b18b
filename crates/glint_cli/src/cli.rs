use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::RenderSettings;
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a scene of spheres to a PPM or PNG image.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
pub struct Args {
    /// Image width in pixels; the height follows from the 16:9 aspect ratio
    #[arg(long, default_value_t = RenderSettings::DEFAULT_IMAGE_WIDTH)]
    pub width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = RenderSettings::DEFAULT_SAMPLES_PER_PIXEL)]
    pub samples: u32,

    /// Seed for sample jitter (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (.ppm or .png); PPM goes to stdout if omitted
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write the gradient test pattern instead of tracing the scene
    #[arg(long)]
    pub demo: bool,

    /// Logging level (logs go to stderr)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["glint"]);

        assert_eq!(args.width, 400);
        assert_eq!(args.samples, 100);
        assert!(args.seed.is_none());
        assert!(args.output.is_none());
        assert!(!args.demo);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "glint",
            "--width",
            "64",
            "-s",
            "4",
            "--seed",
            "9",
            "-o",
            "out.png",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.width, 64);
        assert_eq!(args.samples, 4);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
