//! OpenAI API Backend
//!
//! `GenerationBackend` implementation over OpenAI's completions, chat
//! completions, and image generation endpoints.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{ChatCall, CompletionCall, GenerationBackend, ImageCall, ImagePayload, TextReply};
use crate::config::BackendConfig;
use crate::constants::network;
use crate::types::{DoormanError, Result};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI HTTP backend with secure API key handling
pub struct OpenAiBackend {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl OpenAiBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                DoormanError::Config(
                    "OpenAI API key not found. Set OPENAI_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let api_base = match &config.api_base {
            Some(base) => Self::validate_endpoint(base)?,
            None => DEFAULT_API_BASE.to_string(),
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(network::CONNECTION_TIMEOUT_SECS))
            .build()
            .map_err(|e| DoormanError::api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key_str),
            api_base,
            client,
        })
    }

    /// Validate a configured endpoint URL: http/https only, no trailing slash.
    fn validate_endpoint(endpoint: &str) -> Result<String> {
        let url = url::Url::parse(endpoint).map_err(|e| {
            DoormanError::Config(format!("Invalid API base URL '{}': {}", endpoint, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DoormanError::Config(format!(
                "API base must use http or https scheme, got: {}",
                url.scheme()
            )));
        }

        let mut result = url.to_string();
        if result.ends_with('/') {
            result.pop();
        }
        Ok(result)
    }

    async fn post<Req: Serialize, Resp: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, "sending request to OpenAI API");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| DoormanError::api(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DoormanError::api(format!(
                "OpenAI API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DoormanError::api(format!("Failed to parse OpenAI response: {}", e)))
    }
}

#[async_trait]
impl GenerationBackend for OpenAiBackend {
    async fn complete(&self, call: &CompletionCall) -> Result<TextReply> {
        let request = CompletionWireRequest {
            model: call.model.clone(),
            prompt: call.prompt.clone(),
            temperature: call.temperature,
            max_tokens: call.max_tokens,
            top_p: call.top_p,
            frequency_penalty: call.frequency_penalty,
            presence_penalty: call.presence_penalty,
            stop: call.stop.clone(),
        };

        let body: CompletionWireResponse = self.post("/completions", &request).await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or_else(|| DoormanError::api("No completion in OpenAI response"))?;

        Ok(TextReply {
            text,
            total_tokens: body.usage.map(|u| u.total_tokens).unwrap_or(0),
        })
    }

    async fn chat(&self, call: &ChatCall) -> Result<TextReply> {
        let request = ChatWireRequest {
            model: call.model.clone(),
            messages: vec![
                WireMessage {
                    role: "system".to_string(),
                    content: call.system.clone(),
                },
                WireMessage {
                    role: "user".to_string(),
                    content: call.user.clone(),
                },
            ],
            temperature: call.temperature,
            max_tokens: call.max_tokens,
        };

        let body: ChatWireResponse = self.post("/chat/completions", &request).await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DoormanError::api("No content in OpenAI response"))?;

        Ok(TextReply {
            text,
            total_tokens: body.usage.map(|u| u.total_tokens).unwrap_or(0),
        })
    }

    async fn create_image(&self, call: &ImageCall) -> Result<Vec<ImagePayload>> {
        let request = ImageWireRequest {
            prompt: call.prompt.clone(),
            n: 1,
            size: call.size.clone(),
            response_format: call.format.as_str().to_string(),
        };

        let body: ImageWireResponse = self.post("/images/generations", &request).await?;
        Ok(body
            .data
            .into_iter()
            .map(|d| ImagePayload {
                url: d.url,
                b64_json: d.b64_json,
            })
            .collect())
    }
}

// Request/Response wire types

#[derive(Debug, Serialize)]
struct CompletionWireRequest {
    model: String,
    prompt: String,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    stop: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionWireResponse {
    choices: Vec<CompletionChoice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Serialize)]
struct ChatWireRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatWireResponse {
    choices: Vec<ChatChoice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    total_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ImageWireRequest {
    prompt: String,
    n: u8,
    size: String,
    response_format: String,
}

#[derive(Debug, Deserialize)]
struct ImageWireResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
    b64_json: Option<String>,
}
