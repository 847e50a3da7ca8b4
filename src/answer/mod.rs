//! Answer-Construction Pipeline
//!
//! Turns one question into a composite outcome: answer text, illustrative
//! image, image descriptor, and topic summary, with per-step cost
//! accounting.
//!
//! ## Pipeline states
//!
//! ```text
//! AnswerGeneration -> {NonresponsivenessCheck || GenreClassification}
//!                  -> CaptionGeneration (fiction | non-fiction)
//!                  -> ImageResolution -> Summarization -> Aggregation
//! ```
//!
//! Only a failure of the first state is terminal, and it terminates into the
//! fixed fallback outcome rather than an error. Every later state degrades a
//! single field of the outcome and moves on; nothing is retried.

pub mod caption;
pub mod classify;
pub mod image;
pub mod summary;

pub use caption::{caption_fiction, caption_nonfiction};
pub use classify::classify;
pub use image::{resolve_bytes, resolve_url};
pub use summary::summarize;

use tracing::{info, warn};

use crate::ai::model::{ChatModel, CompletionModel, ImageSize};
use crate::ai::timeout::{TimeoutConfig, with_timeout, with_timeout_map};
use crate::ai::{GenerationClient, GenerationRequest, SharedBackend};
use crate::config::Config;
use crate::types::{CostBreakdown, PipelineOutcome, Result};

/// Subject description for the disclaimer/refusal check on answers.
const NONRESPONSIVE_SUBJECT: &str = "a disclaimer about the limitations of the AI, \
     or a refusal to create any content that could be offensive or disrespectful";

/// Subject description for the fiction check on questions.
const FICTION_SUBJECT: &str = "about fiction";

/// The answer-construction orchestrator.
///
/// One instance serves any number of questions; it holds no per-request
/// state and is safe to share across tasks.
pub struct AnswerPipeline {
    client: GenerationClient,
    chat_model: ChatModel,
    classifier_model: CompletionModel,
    image_size: ImageSize,
    caption_word_limit: usize,
    summary_word_limit: usize,
    timeouts: TimeoutConfig,
}

impl AnswerPipeline {
    pub fn new(backend: SharedBackend, config: &Config) -> Self {
        Self {
            client: GenerationClient::new(backend, config.persona.clone()),
            chat_model: config.models.chat,
            classifier_model: config.models.classifier,
            image_size: config.models.image_size,
            caption_word_limit: config.limits.caption_words,
            summary_word_limit: config.limits.summary_words,
            timeouts: TimeoutConfig::from_secs(config.backend.timeout_secs),
        }
    }

    /// Answer one question end to end.
    ///
    /// Infallible by contract: the only hard failure (base answer
    /// generation) is absorbed into the fixed fallback outcome.
    pub async fn answer_question(&self, question: &str) -> PipelineOutcome {
        let mut costs = CostBreakdown::default();

        // State 1: the only terminal failure path.
        let answer = match with_timeout(
            self.timeouts.llm_request,
            self.client
                .generate(GenerationRequest::new(question, self.chat_model)),
            "answer generation",
        )
        .await
        {
            Ok(generation) => {
                costs.answer = generation.cost;
                generation.text
            }
            Err(e) => {
                warn!(error = %e, "answer generation failed, returning fallback");
                return PipelineOutcome::fallback();
            }
        };

        // States 2 and 3 are independent of each other; run them together.
        let (responsiveness, genre) = tokio::join!(
            with_timeout(
                self.timeouts.llm_request,
                classify(
                    &self.client,
                    self.classifier_model,
                    NONRESPONSIVE_SUBJECT,
                    &answer,
                ),
                "responsiveness check",
            ),
            with_timeout(
                self.timeouts.llm_request,
                classify(&self.client, self.classifier_model, FICTION_SUBJECT, question),
                "genre classification",
            ),
        );

        // Telemetry only: the verdict is recorded but does not change the
        // outcome.
        let (cost, is_nonresponsive) = degrade_verdict(responsiveness, "responsiveness check");
        costs.responsiveness = cost;
        if is_nonresponsive {
            warn!("answer reads as a disclaimer or refusal");
        }

        let (cost, about_fiction) = degrade_verdict(genre, "genre classification");
        costs.genre = cost;

        // Branch caption generation on the genre verdict.
        let caption = if about_fiction {
            with_timeout(
                self.timeouts.llm_request,
                caption_fiction(
                    &self.client,
                    self.classifier_model,
                    &answer,
                    self.caption_word_limit,
                ),
                "fiction caption",
            )
            .await
        } else {
            with_timeout(
                self.timeouts.llm_request,
                caption_nonfiction(
                    &self.client,
                    self.classifier_model,
                    &answer,
                    self.caption_word_limit,
                ),
                "non-fiction caption",
            )
            .await
        };
        let (cost, descriptor) = match caption {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "caption generation failed");
                (0.0, String::new())
            }
        };
        costs.caption = cost;

        // Absent images are an expected outcome, not a failure.
        let (cost, image_url) = match with_timeout_map(
            self.timeouts.image_request,
            resolve_url(&self.client, &descriptor, self.image_size),
            "image resolution",
        )
        .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "image resolution timed out");
                (0.0, None)
            }
        };
        costs.image = cost;

        let (cost, summary) = match with_timeout(
            self.timeouts.llm_request,
            summarize(
                &self.client,
                self.classifier_model,
                question,
                &answer,
                self.summary_word_limit,
            ),
            "summarization",
        )
        .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "summarization failed");
                (0.0, String::new())
            }
        };
        costs.summary = cost;

        costs.log();
        info!(total_usd = costs.total(), "answer constructed");

        PipelineOutcome {
            answer,
            image_url,
            descriptor,
            summary,
            total_cost: costs.total(),
        }
    }

    /// Resolve the illustration for a descriptor to raw bytes at the
    /// configured size. Used by callers that save the image locally instead
    /// of linking it.
    pub async fn illustration_bytes(&self, descriptor: &str) -> Result<(f64, Option<Vec<u8>>)> {
        resolve_bytes(&self.client, descriptor, self.image_size).await
    }
}

/// Collapse a failed classification into the affirmative-bias verdict at
/// zero cost.
fn degrade_verdict(result: Result<(f64, bool)>, step: &str) -> (f64, bool) {
    match result {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!(error = %e, step, "classification failed, assuming yes");
            (0.0, true)
        }
    }
}
