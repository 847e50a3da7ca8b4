//! Cost Estimation
//!
//! Pure per-unit rate lookup. Text rates are USD per token, image rates USD
//! per generated image. The rate table is deliberately partial: it covers
//! exactly the tags the pipeline bills for, and any other tag fails loudly
//! with `UnknownRateTag` instead of computing an undefined cost.

use crate::constants::rates;
use crate::types::{DoormanError, Result};

use super::model::{ChatModel, CompletionModel, ImageSize, ModelTag};

/// Estimate the cost of `units` usage units billed against `tag`.
pub fn estimate(units: f64, tag: ModelTag) -> Result<f64> {
    let rate = match tag {
        ModelTag::Completion(CompletionModel::TextDavinci003) => {
            rates::TEXT_DAVINCI_003_PER_TOKEN
        }
        ModelTag::Chat(ChatModel::Gpt4_0314) => rates::GPT_4_0314_PER_TOKEN,
        ModelTag::Image(ImageSize::Small) => rates::IMAGE_SMALL_PER_IMAGE,
        ModelTag::Image(ImageSize::Medium) => rates::IMAGE_MEDIUM_PER_IMAGE,
        ModelTag::Image(ImageSize::Large) => rates::IMAGE_LARGE_PER_IMAGE,
        unrated => {
            return Err(DoormanError::UnknownRateTag {
                tag: unrated.as_str().to_string(),
            });
        }
    };
    Ok(units * rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RATED_TAGS: [ModelTag; 5] = [
        ModelTag::Completion(CompletionModel::TextDavinci003),
        ModelTag::Chat(ChatModel::Gpt4_0314),
        ModelTag::Image(ImageSize::Small),
        ModelTag::Image(ImageSize::Medium),
        ModelTag::Image(ImageSize::Large),
    ];

    #[test]
    fn test_known_rates() {
        let cost = estimate(1000.0, CompletionModel::TextDavinci003.into()).unwrap();
        assert!((cost - 0.02).abs() < 1e-12);
        let cost = estimate(1000.0, ChatModel::Gpt4_0314.into()).unwrap();
        assert!((cost - 0.03).abs() < 1e-12);
        let cost = estimate(1.0, ImageSize::Medium.into()).unwrap();
        assert!((cost - 0.018).abs() < 1e-12);
    }

    #[test]
    fn test_unrated_tags_fail() {
        for tag in [
            ModelTag::Completion(CompletionModel::TextCurie001),
            ModelTag::Chat(ChatModel::Gpt4),
            ModelTag::Chat(ChatModel::Gpt35),
            ModelTag::Chat(ChatModel::Gpt35Turbo),
        ] {
            match estimate(100.0, tag).unwrap_err() {
                DoormanError::UnknownRateTag { tag: t } => assert_eq!(t, tag.as_str()),
                other => panic!("expected UnknownRateTag, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_units_cost_nothing() {
        for tag in RATED_TAGS {
            assert_eq!(estimate(0.0, tag).unwrap(), 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_monotone_in_units(lo in 0.0f64..1e6, delta in 0.0f64..1e6, idx in 0usize..5) {
            let tag = RATED_TAGS[idx];
            let low = estimate(lo, tag).unwrap();
            let high = estimate(lo + delta, tag).unwrap();
            prop_assert!(high >= low);
        }

        #[test]
        fn prop_deterministic(units in 0.0f64..1e6, idx in 0usize..5) {
            let tag = RATED_TAGS[idx];
            prop_assert_eq!(estimate(units, tag).unwrap(), estimate(units, tag).unwrap());
        }
    }
}
