//! Image pipeline errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch image from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Image has a zero-sized dimension: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Aspect ratio {ratio:.0}:1 exceeds the supported maximum of {max}:1")]
    AspectRatio { ratio: f64, max: u32 },
}
