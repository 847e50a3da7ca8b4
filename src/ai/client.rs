//! Generation Client
//!
//! Cost-accounted front door to the generation backend. Dispatches text
//! requests by capability category, wraps chat prompts in the configured
//! persona, trims replies, and absorbs image-generation refusal into an
//! absent payload so callers can degrade instead of aborting.

use tracing::{debug, warn};

use super::model::{ImageSize, ModelTag};
use super::{ChatCall, CompletionCall, ImageCall, ImageFormat, ImagePayload, SharedBackend};
use crate::constants::sampling;
use crate::types::{DoormanError, Result};

/// One text-generation request. Constructed once, consumed once.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: ModelTag,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub stop: Vec<String>,
}

impl GenerationRequest {
    /// Request with the default sampling parameters and a newline stop.
    pub fn new(prompt: impl Into<String>, model: impl Into<ModelTag>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature: sampling::DEFAULT_TEMPERATURE,
            max_tokens: sampling::DEFAULT_MAX_TOKENS,
            top_p: sampling::DEFAULT_TOP_P,
            frequency_penalty: sampling::DEFAULT_FREQUENCY_PENALTY,
            presence_penalty: sampling::DEFAULT_PRESENCE_PENALTY,
            stop: vec!["\n".to_string()],
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = stop;
        self
    }
}

/// A cost-accounted generation result.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Estimated cost in USD
    pub cost: f64,
    /// Trimmed reply text
    pub text: String,
}

/// Client over a shared backend, holding the chat persona.
#[derive(Clone)]
pub struct GenerationClient {
    backend: SharedBackend,
    persona: String,
}

impl GenerationClient {
    pub fn new(backend: SharedBackend, persona: impl Into<String>) -> Self {
        Self {
            backend,
            persona: persona.into(),
        }
    }

    /// Generate text, dispatching on the request's capability category.
    ///
    /// Completion-style calls forward every sampling parameter. Chat-style
    /// calls wrap the prompt in the persona system turn and forward
    /// temperature and max tokens only. Image tags are not a text
    /// capability and fail with `UnsupportedModel`.
    pub async fn generate(&self, request: GenerationRequest) -> Result<Generation> {
        let tag = request.model;
        let reply = match tag {
            ModelTag::Completion(model) => {
                debug!(model = model.as_str(), "using completion capability");
                self.backend
                    .complete(&CompletionCall {
                        model: model.as_str().to_string(),
                        prompt: request.prompt,
                        temperature: request.temperature,
                        max_tokens: request.max_tokens,
                        top_p: request.top_p,
                        frequency_penalty: request.frequency_penalty,
                        presence_penalty: request.presence_penalty,
                        stop: request.stop,
                    })
                    .await?
            }
            ModelTag::Chat(model) => {
                debug!(model = model.as_str(), "using chat capability");
                self.backend
                    .chat(&ChatCall {
                        model: model.as_str().to_string(),
                        system: self.persona.clone(),
                        user: request.prompt,
                        temperature: request.temperature,
                        max_tokens: request.max_tokens,
                    })
                    .await?
            }
            ModelTag::Image(size) => {
                return Err(DoormanError::UnsupportedModel {
                    model: size.as_str().to_string(),
                });
            }
        };

        let text = reply.text.trim().to_string();
        let cost = super::cost::estimate(reply.total_tokens as f64, tag)?;
        debug!(%text, cost_usd = cost, "generation reply");

        Ok(Generation { cost, text })
    }

    /// Generate one image from a descriptor.
    ///
    /// Provider-side failure (error reply or empty result list) is absorbed
    /// here: the call logs a warning and yields `(0.0, None)` so downstream
    /// steps degrade gracefully.
    pub async fn generate_image(
        &self,
        descriptor: &str,
        size: ImageSize,
        format: ImageFormat,
    ) -> Result<(f64, Option<ImagePayload>)> {
        let call = ImageCall {
            prompt: descriptor.to_string(),
            size: size.as_str().to_string(),
            format,
        };

        let mut data = match self.backend.create_image(&call).await {
            Ok(data) => data,
            Err(e) => {
                // Image generation trips safety filters often enough that a
                // missing image is an expected outcome, not a failure.
                warn!(error = %e, "image generation failed");
                return Ok((0.0, None));
            }
        };

        if data.is_empty() {
            warn!("no image returned");
            return Ok((0.0, None));
        }

        let cost = super::cost::estimate(1.0, ModelTag::Image(size))?;
        Ok((cost, Some(data.remove(0))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::MockBackend;
    use crate::ai::model::{ChatModel, CompletionModel};
    use crate::ai::TextReply;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_completion_dispatch_forwards_sampling() {
        let backend = Arc::new(MockBackend::new().on_complete(|call| {
            assert_eq!(call.model, "text-davinci-003");
            assert_eq!(call.temperature, 0.0);
            assert_eq!(call.max_tokens, 3);
            assert_eq!(call.stop, vec!["\n".to_string()]);
            Ok(TextReply {
                text: "  Yes  ".to_string(),
                total_tokens: 100,
            })
        }));
        let client = GenerationClient::new(backend.clone(), "persona");

        let generation = client
            .generate(
                GenerationRequest::new("Is it?", CompletionModel::TextDavinci003)
                    .temperature(0.0)
                    .max_tokens(3),
            )
            .await
            .unwrap();

        assert_eq!(generation.text, "Yes");
        assert!((generation.cost - 100.0 * 0.02 / 1000.0).abs() < 1e-12);
        assert_eq!(backend.completion_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_dispatch_wraps_persona() {
        let backend = Arc::new(MockBackend::new().on_chat(|call| {
            assert_eq!(call.model, "gpt-4-0314");
            assert_eq!(call.system, "You are a doorman.");
            assert_eq!(call.user, "Hello?");
            Ok(TextReply {
                text: "Hi there.\n".to_string(),
                total_tokens: 20,
            })
        }));
        let client = GenerationClient::new(backend.clone(), "You are a doorman.");

        let generation = client
            .generate(GenerationRequest::new("Hello?", ChatModel::Gpt4_0314))
            .await
            .unwrap();

        assert_eq!(generation.text, "Hi there.");
        assert!((generation.cost - 20.0 * 0.03 / 1000.0).abs() < 1e-12);
        assert_eq!(backend.chat_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_image_tag_is_unsupported_for_text() {
        let backend = Arc::new(MockBackend::new());
        let client = GenerationClient::new(backend, "persona");

        let err = client
            .generate(GenerationRequest::new("prompt", ImageSize::Medium))
            .await
            .unwrap_err();

        assert!(matches!(err, DoormanError::UnsupportedModel { model } if model == "512x512"));
    }

    #[tokio::test]
    async fn test_unrated_model_fails_cost_estimation() {
        let backend = Arc::new(MockBackend::new().on_chat(|_| {
            Ok(TextReply {
                text: "reply".to_string(),
                total_tokens: 10,
            })
        }));
        let client = GenerationClient::new(backend, "persona");

        let err = client
            .generate(GenerationRequest::new("q", ChatModel::Gpt35Turbo))
            .await
            .unwrap_err();

        assert!(matches!(err, DoormanError::UnknownRateTag { .. }));
    }

    #[tokio::test]
    async fn test_image_refusal_absorbed() {
        let backend =
            Arc::new(MockBackend::new().on_image(|_| Err(DoormanError::api("safety rejection"))));
        let client = GenerationClient::new(backend, "persona");

        let (cost, payload) = client
            .generate_image("a cat", ImageSize::Medium, ImageFormat::Url)
            .await
            .unwrap();
        assert_eq!(cost, 0.0);
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn test_image_empty_result_absorbed() {
        let backend = Arc::new(MockBackend::new().on_image(|_| Ok(vec![])));
        let client = GenerationClient::new(backend, "persona");

        let (cost, payload) = client
            .generate_image("a cat", ImageSize::Small, ImageFormat::Url)
            .await
            .unwrap();
        assert_eq!(cost, 0.0);
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn test_image_success_is_billed_per_image() {
        let backend = Arc::new(MockBackend::new());
        let client = GenerationClient::new(backend, "persona");

        let (cost, payload) = client
            .generate_image("a cat", ImageSize::Large, ImageFormat::Url)
            .await
            .unwrap();
        assert!((cost - 0.020).abs() < 1e-12);
        assert!(payload.is_some());
    }
}
