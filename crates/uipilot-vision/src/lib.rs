//! # UIPilot Vision
//!
//! Image pipeline for the UIPilot workspace: resolving image inputs to
//! bitmaps, patch-aligned pixel bounding, PNG/base64 transport encoding,
//! and point-marker annotation.

mod annotate;
mod encode;
mod normalize;
mod source;

pub use annotate::{DEFAULT_MARKER_RADIUS, draw_marker};
pub use encode::{to_data_uri, to_png_base64};
pub use normalize::{
    DEFAULT_MAX_PIXELS, DEFAULT_MIN_PIXELS, PATCH_SIZE, PixelBounds, bounded_dimensions, normalize,
};
pub use source::resolve;
