//! Per-Step Timeout Helpers
//!
//! Every pipeline step runs under an operation timeout so an abandoned
//! remote call cannot hang the whole request.

use std::future::Future;
use std::time::Duration;

use crate::constants::network;
use crate::types::{DoormanError, Result};

/// Timeout durations for the pipeline's remote operations
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Timeout for text generation and classification calls
    pub llm_request: Duration,
    /// Timeout for image generation calls
    pub image_request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            llm_request: Duration::from_secs(network::DEFAULT_TIMEOUT_SECS),
            image_request: Duration::from_secs(network::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TimeoutConfig {
    /// Derive both budgets from a single configured request timeout.
    pub fn from_secs(timeout_secs: u64) -> Self {
        Self {
            llm_request: Duration::from_secs(timeout_secs),
            image_request: Duration::from_secs(timeout_secs),
        }
    }
}

/// Execute an async operation with a timeout.
///
/// Returns a timeout error if the operation doesn't complete within the
/// specified duration.
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(DoormanError::timeout(operation_name, timeout)),
    }
}

/// Execute an async operation with a timeout, wrapping a non-Result output.
pub async fn with_timeout_map<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => Ok(result),
        Err(_) => Err(DoormanError::timeout(operation_name, timeout)),
    }
}
