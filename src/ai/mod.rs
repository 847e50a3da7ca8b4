//! Generation Backend Abstraction
//!
//! Defines the `GenerationBackend` trait over the remote text/image service
//! and the normalized call/reply types shared by every implementation.
//! Dispatch between capabilities, persona wrapping, response trimming, and
//! cost accounting all live in [`client::GenerationClient`]; a backend only
//! moves requests over the wire.
//!
//! ## Modules
//!
//! - `client`: capability dispatch and cost-accounted generation
//! - `cost`: per-unit rate lookup
//! - `model`: closed model-identifier sum types
//! - `openai`: OpenAI-compatible HTTP backend
//! - `timeout`: per-operation timeout helpers

pub mod client;
pub mod cost;
pub mod model;
pub mod openai;
pub mod timeout;

#[cfg(test)]
pub mod mock;

pub use client::{Generation, GenerationClient, GenerationRequest};
pub use model::{ChatModel, CompletionModel, ImageSize, ModelTag};
pub use openai::OpenAiBackend;
pub use timeout::{TimeoutConfig, with_timeout, with_timeout_map};

use async_trait::async_trait;
use std::sync::Arc;

use crate::types::Result;

// =============================================================================
// Normalized Call Types
// =============================================================================

/// A completion-style call with the full set of sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub stop: Vec<String>,
}

/// A chat-style call: a fixed system persona turn plus one user turn.
#[derive(Debug, Clone)]
pub struct ChatCall {
    pub model: String,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Requested encoding of a generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Hosted URL
    Url,
    /// Base64-encoded bytes
    Bytes,
}

impl ImageFormat {
    /// Wire value of the response-format field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Bytes => "b64_json",
        }
    }
}

/// A single-image generation call.
#[derive(Debug, Clone)]
pub struct ImageCall {
    pub prompt: String,
    pub size: String,
    pub format: ImageFormat,
}

// =============================================================================
// Normalized Reply Types
// =============================================================================

/// Text reply plus the provider-reported usage needed for cost estimation.
#[derive(Debug, Clone)]
pub struct TextReply {
    /// Raw first-choice text, untrimmed
    pub text: String,
    /// Total token count reported by the provider (0 when unreported)
    pub total_tokens: u32,
}

/// One generated image, in whichever encoding was requested.
#[derive(Debug, Clone, Default)]
pub struct ImagePayload {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

// =============================================================================
// Generation Backend Trait
// =============================================================================

/// Transport to the remote generation service.
///
/// Implementations perform blocking request/response round-trips and report
/// provider failures as errors; they never interpret results.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit a completion-style text generation call.
    async fn complete(&self, call: &CompletionCall) -> Result<TextReply>;

    /// Submit a chat-style text generation call.
    async fn chat(&self, call: &ChatCall) -> Result<TextReply>;

    /// Submit an image generation call. An empty result list is a valid
    /// reply (provider refusal) and is NOT an error.
    async fn create_image(&self, call: &ImageCall) -> Result<Vec<ImagePayload>>;
}

/// Shared backend handle, reusable across concurrent pipeline invocations.
pub type SharedBackend = Arc<dyn GenerationBackend>;
