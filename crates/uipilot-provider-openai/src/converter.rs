//! Message conversion to the chat-completions wire format.

use uipilot_protocols::{
    ContentPart as ProtoContentPart, ImageSource, Message, MessageContent as ProtoMessageContent,
    MessageRole, ProviderError,
};
use uipilot_vision::PixelBounds;

use crate::api::{ApiMessage, ContentPart, ImageUrl, MessageContent};

/// Convert protocol messages to wire messages.
///
/// Builds a fresh wire-level structure; the caller's messages are left
/// untouched. Every image part is resolved, pixel-normalized, and
/// rewritten as a base64 PNG data URI before it may cross the request
/// boundary. Pre-encoded `data:` URIs pass through unchanged.
pub(crate) async fn convert_messages(
    messages: &[Message],
    bounds: PixelBounds,
    detail: Option<&str>,
) -> Result<Vec<ApiMessage>, ProviderError> {
    let mut converted = Vec::with_capacity(messages.len());
    for message in messages {
        converted.push(convert_message(message, bounds, detail).await?);
    }
    Ok(converted)
}

async fn convert_message(
    message: &Message,
    bounds: PixelBounds,
    detail: Option<&str>,
) -> Result<ApiMessage, ProviderError> {
    let content = match &message.content {
        ProtoMessageContent::Text(text) => MessageContent::Text(text.clone()),
        ProtoMessageContent::Parts(parts) => {
            let mut converted = Vec::with_capacity(parts.len());
            for part in parts {
                converted.push(convert_part(part, bounds, detail).await?);
            }
            MessageContent::Parts(converted)
        }
    };

    Ok(ApiMessage {
        role: role_name(message.role).to_string(),
        content,
    })
}

fn role_name(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

async fn convert_part(
    part: &ProtoContentPart,
    bounds: PixelBounds,
    detail: Option<&str>,
) -> Result<ContentPart, ProviderError> {
    match part {
        ProtoContentPart::Text { text } => Ok(ContentPart::Text { text: text.clone() }),
        ProtoContentPart::Image { source } => {
            let url = match source {
                ImageSource::DataUri(uri) => uri.clone(),
                other => {
                    let bitmap = uipilot_vision::resolve(other).await?;
                    let normalized = uipilot_vision::normalize(&bitmap, bounds)?;
                    uipilot_vision::to_data_uri(&normalized)?
                }
            };
            Ok(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url,
                    detail: detail.map(str::to_string),
                },
            })
        }
    }
}
