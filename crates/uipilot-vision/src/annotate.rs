//! Point-marker annotation.

use image::{DynamicImage, GenericImage, Rgba};

use uipilot_protocols::NormalizedPoint;

/// Default marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: u32 = 5;

const MARKER_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Draw a filled circular marker centered at the point's pixel location.
///
/// The normalized point is scaled by the image dimensions; marker pixels
/// falling outside the image are clipped.
pub fn draw_marker(image: &mut DynamicImage, point: NormalizedPoint, radius: u32) {
    let (cx, cy) = point.to_pixels(image.width(), image.height());
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let r = i64::from(radius);

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            image.put_pixel(x as u32, y as u32, MARKER_COLOR);
        }
    }
}
