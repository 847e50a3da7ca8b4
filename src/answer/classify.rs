//! Yes/No Text Classification
//!
//! Deterministic binary classification over the completion capability, with
//! an affirmative fallback for non-conforming replies.

use tracing::debug;

use crate::ai::model::CompletionModel;
use crate::ai::{GenerationClient, GenerationRequest};
use crate::constants::pipeline as pipeline_constants;
use crate::types::Result;

/// Ask whether `text` matches `subject`, returning (cost, verdict).
///
/// The question is submitted at zero temperature with a 3-token budget. A
/// reply of exactly "Yes" or "No" is taken at face value; anything else is
/// treated as an affirmative verdict: models that go wordy or silent here
/// have usually tripped a safety response while discussing the subject,
/// which corroborates the subject applying.
pub async fn classify(
    client: &GenerationClient,
    model: CompletionModel,
    subject: &str,
    text: &str,
) -> Result<(f64, bool)> {
    let prompt = format!(
        "Is the following text {subject}?\n\
         BEGIN\n\
         {text}\n\
         END\n\
         Yes or no? Write Yes or No, and nothing more.\n\
         Answer: "
    );

    debug!(subject, "classifying text");
    let generation = client
        .generate(
            GenerationRequest::new(prompt, model)
                .temperature(0.0)
                .max_tokens(pipeline_constants::CLASSIFIER_MAX_TOKENS),
        )
        .await?;

    let verdict = match generation.text.as_str() {
        "Yes" => true,
        "No" => false,
        other => {
            debug!(reply = other, "non-conforming classifier reply, assuming yes");
            true
        }
    };

    Ok((generation.cost, verdict))
}
