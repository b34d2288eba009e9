//! Pixel-bound normalization.
//!
//! Vision-language tokenizers consume an image as a grid of fixed-size
//! patches. Before transport, an image is resized so its dimensions align
//! to the patch grid and its total pixel count stays within configured
//! bounds. This module is the only place those bounds are enforced.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use uipilot_protocols::VisionError;

/// Patch edge length of the upstream tokenizer grid.
pub const PATCH_SIZE: u32 = 28;

/// Default lower bound on total pixels (256 patches).
pub const DEFAULT_MIN_PIXELS: u32 = 256 * PATCH_SIZE * PATCH_SIZE;

/// Default upper bound on total pixels (1280 patches).
pub const DEFAULT_MAX_PIXELS: u32 = 1280 * PATCH_SIZE * PATCH_SIZE;

/// Widest width:height (or height:width) ratio the tokenizer accepts.
const MAX_ASPECT_RATIO: u32 = 200;

/// Total pixel bounds applied to images before transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_pixels: u32,
    pub max_pixels: u32,
}

impl PixelBounds {
    pub fn new(min_pixels: u32, max_pixels: u32) -> Self {
        Self {
            min_pixels,
            max_pixels,
        }
    }
}

impl Default for PixelBounds {
    fn default() -> Self {
        Self {
            min_pixels: DEFAULT_MIN_PIXELS,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

/// Resize an image so its dimensions are patch-aligned and its area falls
/// within `bounds`. Returns a copy of the input when it already complies.
pub fn normalize(image: &DynamicImage, bounds: PixelBounds) -> Result<DynamicImage, VisionError> {
    let (width, height) = (image.width(), image.height());
    let (target_width, target_height) = bounded_dimensions(width, height, bounds)?;

    if (target_width, target_height) == (width, height) {
        return Ok(image.clone());
    }

    debug!(
        width,
        height, target_width, target_height, "Resizing image to pixel bounds"
    );
    Ok(image.resize_exact(target_width, target_height, FilterType::Lanczos3))
}

/// Compute the patch-aligned dimensions for an image of the given size.
///
/// Dimensions are snapped to multiples of [`PATCH_SIZE`]; if the snapped
/// area exceeds the maximum bound the image is scaled down (flooring to
/// the patch grid), if it falls below the minimum it is scaled up
/// (ceiling to the patch grid).
pub fn bounded_dimensions(
    width: u32,
    height: u32,
    bounds: PixelBounds,
) -> Result<(u32, u32), VisionError> {
    if width == 0 || height == 0 {
        return Err(VisionError::EmptyImage { width, height });
    }

    let ratio = f64::from(width.max(height)) / f64::from(width.min(height));
    if ratio > f64::from(MAX_ASPECT_RATIO) {
        return Err(VisionError::AspectRatio {
            ratio,
            max: MAX_ASPECT_RATIO,
        });
    }

    let factor = f64::from(PATCH_SIZE);
    let w = f64::from(width);
    let h = f64::from(height);

    let mut w_bar = (w / factor).round().max(1.0) * factor;
    let mut h_bar = (h / factor).round().max(1.0) * factor;

    if w_bar * h_bar > f64::from(bounds.max_pixels) {
        let beta = ((w * h) / f64::from(bounds.max_pixels)).sqrt();
        w_bar = (w / beta / factor).floor().max(1.0) * factor;
        h_bar = (h / beta / factor).floor().max(1.0) * factor;
    } else if w_bar * h_bar < f64::from(bounds.min_pixels) {
        let beta = (f64::from(bounds.min_pixels) / (w * h)).sqrt();
        w_bar = (w * beta / factor).ceil() * factor;
        h_bar = (h * beta / factor).ceil() * factor;
    }

    Ok((w_bar as u32, h_bar as u32))
}
