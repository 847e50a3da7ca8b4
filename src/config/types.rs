//! Configuration Types
//!
//! All configuration structures with sensible defaults. The API credential
//! is never serialized back out and is redacted in debug output; the
//! backend converts it to a SecretString for runtime protection.

use serde::{Deserialize, Serialize};

use crate::ai::model::{ChatModel, CompletionModel, ImageSize};
use crate::constants::{network, pipeline};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation backend settings
    pub backend: BackendConfig,

    /// Default model/size selections
    pub models: ModelConfig,

    /// System persona establishing the assistant's identity on chat calls
    pub persona: String,

    /// Word budgets for captions and summaries
    pub limits: LimitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            models: ModelConfig::default(),
            persona: "Your name is Doorman. You are an AI assistant for a community \
                      chat channel. You answer questions with concise, helpful replies."
                .to_string(),
            limits: LimitConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `DoormanError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.backend.timeout_secs == 0 {
            return Err(crate::types::DoormanError::Config(
                "backend timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.limits.caption_words == 0 || self.limits.summary_words == 0 {
            return Err(crate::types::DoormanError::Config(
                "caption_words and summary_words must be greater than 0".to_string(),
            ));
        }

        if self.persona.trim().is_empty() {
            return Err(crate::types::DoormanError::Config(
                "persona must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Backend Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// API key for the generation backend.
    /// Never serialized to output for security; falls back to the
    /// OPENAI_API_KEY environment variable when unset.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Model Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Chat model answering questions
    pub chat: ChatModel,

    /// Completion model serving classification, captions, and summaries
    pub classifier: CompletionModel,

    /// Size of generated illustrations
    pub image_size: ImageSize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            chat: ChatModel::Gpt4_0314,
            classifier: CompletionModel::TextDavinci003,
            image_size: ImageSize::Medium,
        }
    }
}

// =============================================================================
// Limit Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Word budget for image captions
    pub caption_words: usize,

    /// Word budget for question summaries
    pub summary_words: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            caption_words: pipeline::CAPTION_WORD_LIMIT,
            summary_words: pipeline::SUMMARY_WORD_LIMIT,
        }
    }
}
