//! Doorman - Illustrated Answer Pipeline for Chat Assistants
//!
//! Answers a natural-language question by orchestrating a sequence of calls
//! to a generative text/image service and returning a composite result: the
//! answer itself, an illustrative image, the image's descriptor, and a short
//! topic summary, with per-step cost accounting.
//!
//! ## Core Features
//!
//! - **Answer Pipeline**: ordered generation/classification steps with a
//!   single terminal fallback and graceful per-field degradation
//! - **Capability Dispatch**: completion-style vs chat-style text models as
//!   a closed sum type with exhaustive handling
//! - **Cost Accounting**: per-unit rate lookup and a per-step breakdown
//! - **Resilient Images**: provider refusal degrades to an absent image,
//!   never an aborted request
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use doorman::{AnswerPipeline, ConfigLoader, OpenAiBackend};
//!
//! let config = ConfigLoader::load()?;
//! let backend = Arc::new(OpenAiBackend::new(&config.backend)?);
//! let pipeline = AnswerPipeline::new(backend, &config);
//! let outcome = pipeline.answer_question("Tell me a story").await;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: backend abstraction, capability dispatch, cost estimation
//! - [`answer`]: the pipeline and its classification/caption/summary steps
//! - [`config`]: layered immutable configuration
//! - [`present`]: rendering and display chunking for the front-end boundary

pub mod ai;
pub mod answer;
pub mod config;
pub mod constants;
pub mod present;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{BackendConfig, Config, ConfigLoader, LimitConfig, ModelConfig};

// Error Types
pub use types::error::{DoormanError, Result};

// Outcome
pub use types::outcome::{CostBreakdown, PipelineOutcome};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use answer::AnswerPipeline;

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    // Backends
    GenerationBackend,
    // Client
    GenerationClient,
    GenerationRequest,
    OpenAiBackend,
    SharedBackend,
    // Timeout
    TimeoutConfig,
    with_timeout,
};
pub use ai::model::{ChatModel, CompletionModel, ImageSize, ModelTag};
