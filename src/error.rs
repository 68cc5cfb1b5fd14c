//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, image codec and font errors, and provides
//! semantic variants for missing sheets and detection failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("File not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("Could not detect bounds for {name} near ({x}, {y})")]
    DetectionFailure { name: String, x: u32, y: u32 },

    #[error("Could not detect a common tile size in {sheet}")]
    NoCommonSize { sheet: String },

    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}
