//! Message content types.

use std::path::PathBuf;

use image::DynamicImage;
use url::Url;

/// Content of a message.
#[derive(Debug, Clone)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Get the text content of the message.
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|p| match p {
                    ContentPart::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Create a text content.
    pub fn from_text(text: impl Into<String>) -> Self {
        MessageContent::Text(text.into())
    }
}

/// A part of a message content.
#[derive(Debug, Clone)]
pub enum ContentPart {
    Text { text: String },
    Image { source: ImageSource },
}

impl ContentPart {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Create an image part.
    pub fn image(source: impl Into<ImageSource>) -> Self {
        ContentPart::Image {
            source: source.into(),
        }
    }
}

/// Where an image comes from before it is encoded for transport.
///
/// Every variant except [`ImageSource::DataUri`] must be resolved to a
/// bitmap, pixel-normalized, and re-encoded before it may cross the
/// request boundary.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Local file, read and decoded at conversion time.
    Path(PathBuf),
    /// Remote image, fetched over HTTP at conversion time.
    Url(Url),
    /// Already-decoded bitmap.
    Bitmap(DynamicImage),
    /// Pre-encoded `data:` URI, forwarded untouched.
    DataUri(String),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<Url> for ImageSource {
    fn from(url: Url) -> Self {
        ImageSource::Url(url)
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(image: DynamicImage) -> Self {
        ImageSource::Bitmap(image)
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
