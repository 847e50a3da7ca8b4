//! Question/Answer Summarization
//!
//! Produces the short topic label shown as the header of a rendered answer.

use tracing::debug;

use crate::ai::model::CompletionModel;
use crate::ai::{GenerationClient, GenerationRequest};
use crate::types::Result;

/// Summarize the general topic of a question/answer pair in at most
/// `word_limit` words, returning (cost, summary).
///
/// Unlike the caption generators, the reply is not scrubbed of delimiter
/// tokens; the stop sequence on END is relied on to bound it.
pub async fn summarize(
    client: &GenerationClient,
    model: CompletionModel,
    question: &str,
    answer: &str,
    word_limit: usize,
) -> Result<(f64, String)> {
    let prompt = format!(
        "Summarize the general topic of the following question/command and \
         answer/response pair.\n\
         BEGIN QUESTION OR COMMAND\n\
         {question}\n\
         END QUESTION OR COMMAND\n\
         BEGIN RESPONSE\n\
         {answer}\n\
         END RESPONSE\n\
         No more than {word_limit} words. The summary should be short, \
         generic, but as specific as possible for being only {word_limit} \
         words.\n\
         \n\
         BEGIN SUMMARY\n"
    );

    debug!("generating question summary");
    let generation = client
        .generate(GenerationRequest::new(prompt, model).stop(vec!["END".to_string()]))
        .await?;
    debug!(summary = %generation.text, "question summary reply");

    Ok((generation.cost, generation.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::MockBackend;
    use crate::ai::TextReply;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_summary_passes_through_untouched() {
        let backend = Arc::new(MockBackend::new().on_complete(|call| {
            assert!(call.prompt.contains("BEGIN QUESTION OR COMMAND"));
            assert!(call.prompt.contains("No more than 10 words"));
            assert_eq!(call.stop, vec!["END".to_string()]);
            Ok(TextReply {
                text: "Dragon bedtime story".to_string(),
                total_tokens: 9,
            })
        }));
        let client = GenerationClient::new(backend, "persona");

        let (cost, summary) = summarize(
            &client,
            CompletionModel::TextDavinci003,
            "Tell me a story",
            "Once upon a time...",
            10,
        )
        .await
        .unwrap();

        assert_eq!(summary, "Dragon bedtime story");
        assert!(cost > 0.0);
    }

    #[tokio::test]
    async fn test_summary_keeps_leaked_delimiters() {
        // Faithful behavior: no delimiter scrubbing on summaries.
        let backend = Arc::new(MockBackend::new().on_complete(|_| {
            Ok(TextReply {
                text: "BEGIN Dragon story".to_string(),
                total_tokens: 4,
            })
        }));
        let client = GenerationClient::new(backend, "persona");

        let (_, summary) = summarize(&client, CompletionModel::TextDavinci003, "q", "a", 10)
            .await
            .unwrap();
        assert_eq!(summary, "BEGIN Dragon story");
    }
}
