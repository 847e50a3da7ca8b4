//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (DoormanError) for the entire application
//! - Loud failures for contract violations (unrated tags, wrong capability)
//! - No panic/unwrap - all errors are recoverable
//!
//! Provider-side image refusal is deliberately NOT an error variant: it is
//! absorbed at the generation-client boundary as an absent payload with zero
//! cost, and the pipeline degrades instead of aborting.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DoormanError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Contract Errors
    // -------------------------------------------------------------------------
    /// Cost estimation was requested for a model/size tag with no bound rate.
    #[error("no cost rate bound for tag '{tag}'")]
    UnknownRateTag { tag: String },

    /// Text generation was requested for a tag outside both text categories.
    #[error("model '{model}' is not a text-generation capability")]
    UnsupportedModel { model: String },

    // -------------------------------------------------------------------------
    // Backend Errors
    // -------------------------------------------------------------------------
    /// Transport or provider failure from the generation backend.
    #[error("generation API error: {0}")]
    Api(String),

    /// Operation timeout with context
    #[error("timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("config error: {0}")]
    Config(String),
}

impl DoormanError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create an API error from a message
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DoormanError>;
