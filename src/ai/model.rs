//! Model Identifier Tags
//!
//! Closed sum types naming every backend capability the client can invoke.
//! Dispatch between completion-style and chat-style text generation is an
//! exhaustive match over these tags, so adding a new category is a
//! compile-time-checked decision. Image sizes double as cost-rate keys.

use serde::{Deserialize, Serialize};

/// Completion-style text models (single prompt in, continuation out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionModel {
    #[serde(rename = "text-davinci-003")]
    TextDavinci003,
    #[serde(rename = "text-curie-001")]
    TextCurie001,
}

impl CompletionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextDavinci003 => "text-davinci-003",
            Self::TextCurie001 => "text-curie-001",
        }
    }
}

/// Chat-style text models (system + user turns in, reply turn out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    #[serde(rename = "gpt-4-0314")]
    Gpt4_0314,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5")]
    Gpt35,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ChatModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt4_0314 => "gpt-4-0314",
            Self::Gpt4 => "gpt-4",
            Self::Gpt35 => "gpt-3.5",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

/// Generated image dimensions. Also the cost-rate key for image calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Small,
    #[serde(rename = "512x512")]
    Medium,
    #[serde(rename = "1024x1024")]
    Large,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "256x256",
            Self::Medium => "512x512",
            Self::Large => "1024x1024",
        }
    }
}

/// A model identifier with its capability category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTag {
    Completion(CompletionModel),
    Chat(ChatModel),
    Image(ImageSize),
}

impl ModelTag {
    /// The wire identifier sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completion(m) => m.as_str(),
            Self::Chat(m) => m.as_str(),
            Self::Image(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for ModelTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<CompletionModel> for ModelTag {
    fn from(m: CompletionModel) -> Self {
        Self::Completion(m)
    }
}

impl From<ChatModel> for ModelTag {
    fn from(m: ChatModel) -> Self {
        Self::Chat(m)
    }
}

impl From<ImageSize> for ModelTag {
    fn from(s: ImageSize) -> Self {
        Self::Image(s)
    }
}
