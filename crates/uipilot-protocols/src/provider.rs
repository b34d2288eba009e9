//! Vision model trait definition.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::Message;

/// Core trait for chat-completion backed vision models.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Send one conversation and return the completion text.
    ///
    /// Implementations must replace every image content part with an
    /// embedded transport encoding before anything crosses the wire; the
    /// caller's messages are never mutated.
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError>;
}
