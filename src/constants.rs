//! Global Constants
//!
//! Centralized constants for rates, defaults, and tuning.
//! All magic numbers should be defined here with documentation.

/// Per-unit cost rates, in USD.
///
/// Text rates are per token; image rates are per generated image.
/// Tags without an entry here are unrated and fail cost estimation.
pub mod rates {
    /// text-davinci-003 completion rate (USD per token)
    pub const TEXT_DAVINCI_003_PER_TOKEN: f64 = 0.02 / 1000.0;

    /// gpt-4-0314 chat rate (USD per token)
    pub const GPT_4_0314_PER_TOKEN: f64 = 0.03 / 1000.0;

    /// 256x256 image rate (USD per image)
    pub const IMAGE_SMALL_PER_IMAGE: f64 = 0.016;

    /// 512x512 image rate (USD per image)
    pub const IMAGE_MEDIUM_PER_IMAGE: f64 = 0.018;

    /// 1024x1024 image rate (USD per image)
    pub const IMAGE_LARGE_PER_IMAGE: f64 = 0.020;
}

/// Sampling defaults for generation requests
pub mod sampling {
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Default maximum output tokens
    pub const DEFAULT_MAX_TOKENS: u32 = 128;

    /// Default nucleus-sampling parameter
    pub const DEFAULT_TOP_P: f32 = 1.0;

    /// Default frequency penalty
    pub const DEFAULT_FREQUENCY_PENALTY: f32 = 0.0;

    /// Default presence penalty
    pub const DEFAULT_PRESENCE_PENALTY: f32 = 0.0;
}

/// Answer pipeline constants
pub mod pipeline {
    /// Fixed user-facing reply when base answer generation fails
    pub const FALLBACK_ANSWER: &str = "I had some issue. Please try again later.";

    /// Word budget for image captions
    pub const CAPTION_WORD_LIMIT: usize = 30;

    /// Word budget for question summaries
    pub const SUMMARY_WORD_LIMIT: usize = 10;

    /// Token budget for yes/no classification replies
    pub const CLASSIFIER_MAX_TOKENS: u32 = 3;
}

/// Display/rendering constants for the presentation boundary
pub mod display {
    /// Maximum characters per rendered message chunk
    pub const MAX_MESSAGE_CHARS: usize = 2000;

    /// Notice shown in place of an image that could not be generated
    pub const IMAGE_UNAVAILABLE_NOTICE: &str = "Image unable to be generated.";
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 30;
}
