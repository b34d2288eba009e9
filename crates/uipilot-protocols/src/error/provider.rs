//! Vision provider errors.

use thiserror::Error;

use super::VisionError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Response contained no completion text")]
    EmptyResponse,

    #[error("Image processing failed: {0}")]
    Image(#[from] VisionError),
}
