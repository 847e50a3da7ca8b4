//! Presentation Boundary
//!
//! Rendering rules shared with whatever front-end delivers the outcome: a
//! summary header, the image descriptor, the image URL (or a fixed notice
//! when generation refused), then the answer split into display-sized
//! chunks. Chat platforms cap message length, so the answer is sent as
//! contiguous chunks whose concatenation reconstructs it exactly.

use crate::constants::display;
use crate::types::PipelineOutcome;

/// Split text into contiguous chunks of at most `max_chars` characters.
///
/// Chunks preserve order and concatenate back to the original text.
/// `max_chars` must be greater than zero.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    debug_assert!(max_chars > 0, "max_chars must be greater than zero");
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Render an outcome as the ordered message sequence the front-end sends.
pub fn render(outcome: &PipelineOutcome) -> Vec<String> {
    let mut messages = vec![format!("**{}**\n*{}*", outcome.summary, outcome.descriptor)];

    match &outcome.image_url {
        Some(url) => messages.push(url.clone()),
        None => messages.push(display::IMAGE_UNAVAILABLE_NOTICE.to_string()),
    }

    messages.extend(chunk_text(&outcome.answer, display::MAX_MESSAGE_CHARS));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunking_splits_and_round_trips() {
        let text = "x".repeat(5000);
        let chunks = chunk_text(&text, 2000);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 2000);
        assert_eq!(chunks[1].len(), 2000);
        assert_eq!(chunks[2].len(), 1000);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_chunking_short_text_is_one_chunk() {
        let chunks = chunk_text("short answer", 2000);
        assert_eq!(chunks, vec!["short answer".to_string()]);
    }

    #[test]
    fn test_chunking_empty_text_yields_no_chunks() {
        assert!(chunk_text("", 2000).is_empty());
    }

    #[test]
    fn test_chunking_respects_char_boundaries() {
        // Multibyte characters must not be split mid-encoding.
        let text = "héllo wörld".repeat(300);
        let chunks = chunk_text(&text, 100);
        assert!(chunks.iter().all(|c| c.chars().count() <= 100));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_render_with_image() {
        let outcome = PipelineOutcome {
            answer: "The answer.".to_string(),
            image_url: Some("https://images.example/cat.png".to_string()),
            descriptor: "A photo of a cat".to_string(),
            summary: "Cats".to_string(),
            total_cost: 0.02,
        };
        let messages = render(&outcome);

        assert_eq!(messages[0], "**Cats**\n*A photo of a cat*");
        assert_eq!(messages[1], "https://images.example/cat.png");
        assert_eq!(messages[2], "The answer.");
    }

    #[test]
    fn test_render_without_image_shows_notice() {
        let outcome = PipelineOutcome {
            answer: "The answer.".to_string(),
            image_url: None,
            descriptor: "A photo of a cat".to_string(),
            summary: "Cats".to_string(),
            total_cost: 0.0,
        };
        let messages = render(&outcome);

        assert_eq!(messages[1], "Image unable to be generated.");
    }

    #[test]
    fn test_render_chunks_long_answers_in_order() {
        let outcome = PipelineOutcome {
            answer: "a".repeat(4200),
            image_url: None,
            descriptor: String::new(),
            summary: String::new(),
            total_cost: 0.0,
        };
        let messages = render(&outcome);

        // Header + notice + 3 chunks.
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[2].len(), 2000);
        assert_eq!(messages[4].len(), 200);
    }
}
