//! Error types for rendering and image output.

use thiserror::Error;

/// Errors that can occur while building a scene, rendering or saving.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Degenerate sphere: radius must be finite and positive, got {radius}")]
    DegenerateSphere { radius: f64 },

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
