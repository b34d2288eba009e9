//! Point literal errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointError {
    #[error("Expected two coordinates, got {0}")]
    ComponentCount(usize),

    #[error("Coordinate is not a number: {0}")]
    NotANumber(String),

    #[error("Coordinate {0} outside the normalized range [0, 1]")]
    OutOfRange(f64),
}
