//! Transport encoding.

use std::io::Cursor;

use base64::Engine;
use image::{DynamicImage, ImageFormat};

use uipilot_protocols::VisionError;

/// Encode an image as base64 PNG.
pub fn to_png_base64(image: &DynamicImage) -> Result<String, VisionError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| VisionError::Encode(e.to_string()))?;

    Ok(base64::engine::general_purpose::STANDARD.encode(buffer.into_inner()))
}

/// Encode an image as a PNG `data:` URI for embedding in a request.
pub fn to_data_uri(image: &DynamicImage) -> Result<String, VisionError> {
    Ok(format!("data:image/png;base64,{}", to_png_base64(image)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_prefix() {
        let image = DynamicImage::new_rgb8(8, 8);
        let uri = to_data_uri(&image).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn test_base64_decodes_to_png() {
        let image = DynamicImage::new_rgb8(8, 8);
        let encoded = to_png_base64(&image).unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        // PNG signature
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
