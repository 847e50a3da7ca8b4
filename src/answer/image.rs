//! Image Resolution
//!
//! Turns an image descriptor into a hosted URL or raw bytes. URL resolution
//! swallows every failure mode: an absent image degrades the outcome, it
//! never aborts the pipeline.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::warn;

use crate::ai::model::ImageSize;
use crate::ai::{GenerationClient, ImageFormat};

/// Resolve a descriptor to a hosted image URL, returning (cost, url).
///
/// Never fails: any error from the underlying call, a refusal, or a payload
/// without a URL all yield `(0.0, None)`.
pub async fn resolve_url(
    client: &GenerationClient,
    descriptor: &str,
    size: ImageSize,
) -> (f64, Option<String>) {
    match client
        .generate_image(descriptor, size, ImageFormat::Url)
        .await
    {
        Ok((cost, Some(payload))) => match payload.url {
            Some(url) => (cost, Some(url)),
            None => {
                warn!("image payload missing URL");
                (0.0, None)
            }
        },
        Ok((_, None)) => (0.0, None),
        Err(e) => {
            warn!(error = %e, "image URL resolution failed");
            (0.0, None)
        }
    }
}

/// Resolve a descriptor to raw image bytes at a concrete size, returning
/// (cost, bytes). Refusal and malformed base64 yield an absent payload.
pub async fn resolve_bytes(
    client: &GenerationClient,
    descriptor: &str,
    size: ImageSize,
) -> crate::types::Result<(f64, Option<Vec<u8>>)> {
    let (cost, payload) = client
        .generate_image(descriptor, size, ImageFormat::Bytes)
        .await?;

    let Some(encoded) = payload.and_then(|p| p.b64_json) else {
        return Ok((0.0, None));
    };

    match BASE64.decode(encoded.as_bytes()) {
        Ok(bytes) => Ok((cost, Some(bytes))),
        Err(e) => {
            warn!(error = %e, "image payload was not valid base64");
            Ok((0.0, None))
        }
    }
}
