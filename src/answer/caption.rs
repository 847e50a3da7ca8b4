//! Image Caption Generation
//!
//! Two caption variants over the completion capability: a documentary-style
//! photo caption for non-fiction answers and an illustrative description
//! (naming a visual medium) for fiction. Both bound the caption to a word
//! limit, stop generation at the closing delimiter, and scrub any leaked
//! delimiter tokens so the descriptor is always a single line.

use tracing::debug;

use crate::ai::model::CompletionModel;
use crate::ai::{GenerationClient, GenerationRequest};
use crate::types::Result;

/// Caption for an illustrative image of a fictional text, naming the
/// medium and style of the image.
pub async fn caption_fiction(
    client: &GenerationClient,
    model: CompletionModel,
    text: &str,
    word_limit: usize,
) -> Result<(f64, String)> {
    let prompt = format!(
        "Generate an image descriptor for the following text.\n\
         BEGIN\n\
         {text}\n\
         END\n\
         Write a short description of some element in the text, to illustrate \
         the subject. Write the medium of the image into the description \
         (i.e. A <medium and style of image> ...).\n\
         No more than {word_limit} words. The reader should not need to know \
         the story to understand the description.\n\
         \n\
         Description:\n\
         BEGIN"
    );

    debug!("generating fiction image descriptor");
    run_caption(client, model, prompt).await
}

/// Caption for a documentary-style photograph accompanying a non-fiction
/// text. The caption must identify its subjects on its own.
pub async fn caption_nonfiction(
    client: &GenerationClient,
    model: CompletionModel,
    text: &str,
    word_limit: usize,
) -> Result<(f64, String)> {
    let prompt = format!(
        "Generate a caption for a photograph related to the following text, \
         one which would be good to showcase alongside the text.\n\
         BEGIN\n\
         {text}\n\
         END\n\
         No more than {word_limit} words. The reader should not need to have \
         read the article to understand the caption (i.e. it should completely \
         identify who or what the subjects are), and it should be accessible.\n\
         \n\
         Description:\n\
         BEGIN"
    );

    debug!("generating non-fiction image descriptor");
    run_caption(client, model, prompt).await
}

async fn run_caption(
    client: &GenerationClient,
    model: CompletionModel,
    prompt: String,
) -> Result<(f64, String)> {
    let generation = client
        .generate(GenerationRequest::new(prompt, model).stop(vec!["END".to_string()]))
        .await?;

    let descriptor = scrub_delimiters(&generation.text);
    debug!(%descriptor, "image descriptor reply");

    Ok((generation.cost, descriptor))
}

/// Strip leaked BEGIN/END tokens and newlines, in case the model didn't
/// listen well, leaving a single-line descriptor.
fn scrub_delimiters(reply: &str) -> String {
    reply
        .replace("BEGIN", "")
        .replace("END", "")
        .replace('\n', "")
        .trim_start()
        .to_string()
}
