//! GUI grounding adapter over an OpenAI-compatible endpoint.

use std::path::Path;

use async_trait::async_trait;
use image::DynamicImage;
use tracing::debug;

use uipilot_protocols::{
    ContentPart, ImageSource, Message, NormalizedPoint, ProviderError, VisionError, VisionModel,
};
use uipilot_vision::PixelBounds;

use crate::api::{ApiRequest, ApiResponse};
use crate::converter::convert_messages;
use crate::prompts::{DEFAULT_ACTION_INSTRUCTION, DEFAULT_SYSTEM_PROMPT};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Image detail hint forwarded with every image part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageDetail {
    #[default]
    Auto,
    Low,
    High,
}

impl ImageDetail {
    /// Wire value; `Auto` is the server default and is omitted.
    fn as_wire(self) -> Option<&'static str> {
        match self {
            ImageDetail::Auto => None,
            ImageDetail::Low => Some("low"),
            ImageDetail::High => Some("high"),
        }
    }
}

/// Adapter configuration. Built once; immutable after the adapter is
/// constructed.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub detail: ImageDetail,
    pub system_prompt: String,
    pub action_instruction: String,
    pub bounds: PixelBounds,
}

impl AdapterConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: None,
            api_key: None,
            detail: ImageDetail::Auto,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            action_instruction: DEFAULT_ACTION_INSTRUCTION.to_string(),
            bounds: PixelBounds::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_detail(mut self, detail: ImageDetail) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_action_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.action_instruction = instruction.into();
        self
    }

    pub fn with_pixel_bounds(mut self, bounds: PixelBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// Facade over a remote chat-completions endpoint for GUI next-action
/// prediction.
pub struct GuiVisionAdapter {
    config: AdapterConfig,
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GuiVisionAdapter {
    /// Create an adapter, resolving environment fallbacks once.
    ///
    /// `OPENAI_BASE_URL` and `OPENAI_API_KEY` fill in values the config
    /// leaves unset; per-call logic never reads the environment again. A
    /// missing key surfaces as [`ProviderError::MissingApiKey`] on the
    /// first query rather than here.
    pub fn new(config: AdapterConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok());
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));

        Self {
            config,
            endpoint,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Predict the next action for a single screenshot.
    ///
    /// Issues one chat completion: a system message carrying the
    /// configured system prompt, then a user message with exactly three
    /// parts in fixed order: the action-space instruction, the caller's
    /// instruction, and the screenshot as a base64 PNG data URI.
    pub async fn query_screenshot(
        &self,
        image_path: impl AsRef<Path>,
        instruction: impl Into<String>,
    ) -> Result<String, ProviderError> {
        let messages = vec![
            Message::system(self.config.system_prompt.clone()),
            Message::user_parts(vec![
                ContentPart::text(self.config.action_instruction.clone()),
                ContentPart::text(instruction),
                ContentPart::image(image_path.as_ref().to_path_buf()),
            ]),
        ];
        self.complete(&messages).await
    }

    /// Send a prior conversation as-is and return the completion text.
    ///
    /// Image parts are rewritten into data URIs within a fresh request
    /// structure; the caller's messages are never mutated. Unlike
    /// [`Self::query_screenshot`], no system prompt or action-space
    /// instruction is injected: conversation callers are expected to have
    /// embedded their own instructions in an earlier turn.
    pub async fn query_conversation(&self, messages: &[Message]) -> Result<String, ProviderError> {
        self.complete(messages).await
    }

    /// Render a predicted point onto an image.
    ///
    /// The image passes through the same pixel normalization used for
    /// transport, so the marker lands where the model's normalized
    /// coordinates point. Fetches the image when the source is a URL;
    /// makes no model call.
    pub async fn annotate_point(
        &self,
        source: &ImageSource,
        point: Option<NormalizedPoint>,
        radius: u32,
    ) -> Result<DynamicImage, VisionError> {
        let bitmap = uipilot_vision::resolve(source).await?;
        let mut normalized = uipilot_vision::normalize(&bitmap, self.config.bounds)?;
        if let Some(point) = point {
            uipilot_vision::draw_marker(&mut normalized, point, radius);
        }
        Ok(normalized)
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Dispatching chat completion"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status,
                message: text,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)?;

        debug!(length = text.len(), "Received completion");
        Ok(text)
    }
}

#[async_trait]
impl VisionModel for GuiVisionAdapter {
    fn id(&self) -> &str {
        "openai-compatible"
    }

    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
        let wire_messages =
            convert_messages(messages, self.config.bounds, self.config.detail.as_wire()).await?;
        let request = ApiRequest {
            model: self.config.model.clone(),
            messages: wire_messages,
        };
        self.dispatch(&request).await
    }
}
