//! Image input resolution.

use base64::Engine;
use image::DynamicImage;
use tracing::debug;

use uipilot_protocols::{ImageSource, VisionError};

/// Resolve an image source to a decoded bitmap.
///
/// Fetching an [`ImageSource::Url`] is the only network side effect in
/// this crate. I/O and decode failures surface here, before any model
/// call is made.
pub async fn resolve(source: &ImageSource) -> Result<DynamicImage, VisionError> {
    match source {
        ImageSource::Path(path) => {
            let bytes = std::fs::read(path).map_err(|e| VisionError::Io {
                path: path.clone(),
                source: e,
            })?;
            decode(&bytes)
        }
        ImageSource::Url(url) => {
            debug!(%url, "Fetching remote image");
            let response = reqwest::get(url.clone())
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| VisionError::Fetch {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            let bytes = response.bytes().await.map_err(|e| VisionError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            decode(&bytes)
        }
        ImageSource::Bitmap(image) => Ok(image.clone()),
        ImageSource::DataUri(uri) => {
            let payload = uri
                .split_once("base64,")
                .map(|(_, data)| data)
                .ok_or_else(|| {
                    VisionError::Decode("data URI without a base64 payload".to_string())
                })?;
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(payload)
                .map_err(|e| VisionError::Decode(e.to_string()))?;
            decode(&bytes)
        }
    }
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, VisionError> {
    image::load_from_memory(bytes).map_err(|e| VisionError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::encode::to_data_uri;

    #[tokio::test]
    async fn test_resolve_missing_path() {
        let source = ImageSource::Path(PathBuf::from("/no/such/screenshot.png"));
        let err = resolve(&source).await.unwrap_err();
        match err {
            VisionError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/no/such/screenshot.png"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.png");
        DynamicImage::new_rgb8(12, 8).save(&path).unwrap();

        let resolved = resolve(&ImageSource::Path(path)).await.unwrap();
        assert_eq!((resolved.width(), resolved.height()), (12, 8));
    }

    #[tokio::test]
    async fn test_resolve_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a PNG").unwrap();

        let err = resolve(&ImageSource::Path(path)).await.unwrap_err();
        assert!(matches!(err, VisionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_resolve_bitmap_passthrough() {
        let bitmap = DynamicImage::new_rgb8(30, 20);
        let resolved = resolve(&ImageSource::Bitmap(bitmap)).await.unwrap();
        assert_eq!((resolved.width(), resolved.height()), (30, 20));
    }

    #[tokio::test]
    async fn test_resolve_data_uri() {
        let bitmap = DynamicImage::new_rgb8(6, 6);
        let uri = to_data_uri(&bitmap).unwrap();
        let resolved = resolve(&ImageSource::DataUri(uri)).await.unwrap();
        assert_eq!((resolved.width(), resolved.height()), (6, 6));
    }

    #[tokio::test]
    async fn test_resolve_malformed_data_uri() {
        let err = resolve(&ImageSource::DataUri("data:image/png;q=1".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_resolve_unreachable_url() {
        let url = url::Url::parse("http://127.0.0.1:9/screen.png").unwrap();
        let err = resolve(&ImageSource::Url(url)).await.unwrap_err();
        assert!(matches!(err, VisionError::Fetch { .. }));
    }
}
