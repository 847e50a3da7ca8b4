//! Pipeline Outcome Types
//!
//! The composite answer returned to the presentation layer, plus the
//! per-step cost breakdown logged for diagnostics. One outcome is produced
//! per question and discarded after rendering; nothing here persists.

use crate::constants::pipeline as pipeline_constants;

/// Composite result of one answer-construction run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    /// The generated answer text
    pub answer: String,
    /// Hosted URL of the illustrative image, absent when generation refused
    pub image_url: Option<String>,
    /// Image descriptor the illustration was generated from
    pub descriptor: String,
    /// Short topic label for the question/answer pair
    pub summary: String,
    /// Sum of all per-step estimated costs (USD)
    pub total_cost: f64,
}

impl PipelineOutcome {
    /// The fixed outcome substituted when base answer generation fails.
    pub fn fallback() -> Self {
        Self {
            answer: pipeline_constants::FALLBACK_ANSWER.to_string(),
            image_url: None,
            descriptor: String::new(),
            summary: String::new(),
            total_cost: 0.0,
        }
    }
}

/// Estimated cost of each pipeline step, in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostBreakdown {
    /// Base answer generation
    pub answer: f64,
    /// Disclaimer/refusal detection on the answer
    pub responsiveness: f64,
    /// Fiction/non-fiction classification of the question
    pub genre: f64,
    /// Image caption generation
    pub caption: f64,
    /// Image generation
    pub image: f64,
    /// Question/answer summarization
    pub summary: f64,
}

impl CostBreakdown {
    /// Total estimated cost across all steps.
    pub fn total(&self) -> f64 {
        self.answer + self.responsiveness + self.genre + self.caption + self.image + self.summary
    }

    /// Emit the breakdown as a structured diagnostic trace.
    pub fn log(&self) {
        tracing::info!(
            answer_usd = self.answer,
            responsiveness_usd = self.responsiveness,
            genre_usd = self.genre,
            caption_usd = self.caption,
            image_usd = self.image,
            summary_usd = self.summary,
            total_usd = self.total(),
            "cost breakdown"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_outcome_is_empty_and_free() {
        let outcome = PipelineOutcome::fallback();
        assert_eq!(outcome.answer, "I had some issue. Please try again later.");
        assert!(outcome.image_url.is_none());
        assert!(outcome.descriptor.is_empty());
        assert!(outcome.summary.is_empty());
        assert_eq!(outcome.total_cost, 0.0);
    }

    #[test]
    fn test_cost_breakdown_total() {
        let costs = CostBreakdown {
            answer: 0.03,
            responsiveness: 0.001,
            genre: 0.001,
            caption: 0.002,
            image: 0.018,
            summary: 0.002,
        };
        assert!((costs.total() - 0.054).abs() < 1e-12);
    }

    #[test]
    fn test_cost_breakdown_default_is_zero() {
        assert_eq!(CostBreakdown::default().total(), 0.0);
    }
}
