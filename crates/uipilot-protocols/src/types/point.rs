//! Normalized screen coordinates.

use std::str::FromStr;

use crate::error::PointError;

/// A point in normalized screen space, both coordinates in `[0, 1]`.
///
/// Grounding models report element locations as fractions of the screen
/// size, independent of the actual resolution. Two entry points exist:
/// [`NormalizedPoint::new`] for typed coordinates and the [`FromStr`]
/// implementation for bracketed literals such as `[0.42, 0.87]` as they
/// appear in model output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    /// Create a point, rejecting coordinates outside `[0, 1]`.
    pub fn new(x: f64, y: f64) -> Result<Self, PointError> {
        for value in [x, y] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PointError::OutOfRange(value));
            }
        }
        Ok(Self { x, y })
    }

    /// Pixel position of this point on an image of the given size.
    pub fn to_pixels(&self, width: u32, height: u32) -> (i64, i64) {
        (
            (self.x * f64::from(width)).round() as i64,
            (self.y * f64::from(height)).round() as i64,
        )
    }
}

impl FromStr for NormalizedPoint {
    type Err = PointError;

    /// Parse a point literal: `[x, y]`, `(x, y)`, or bare `x, y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .or_else(|| {
                trimmed
                    .strip_prefix('(')
                    .and_then(|rest| rest.strip_suffix(')'))
            })
            .unwrap_or(trimmed);

        let components: Vec<&str> = inner.split(',').map(str::trim).collect();
        if components.len() != 2 {
            return Err(PointError::ComponentCount(components.len()));
        }

        let x = parse_coordinate(components[0])?;
        let y = parse_coordinate(components[1])?;
        Self::new(x, y)
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, PointError> {
    raw.parse::<f64>()
        .map_err(|_| PointError::NotANumber(raw.to_string()))
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
