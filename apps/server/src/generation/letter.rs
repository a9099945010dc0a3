//! Motivational letter generation.

use serde::Serialize;

use crate::gemini::{CompletionClient, SamplingParams};
use crate::generation::language;
use crate::generation::outcome::Outcome;
use crate::generation::prompts;

#[derive(Debug, Serialize)]
pub struct GeneratedLetter {
    pub letter: String,
    pub language: String,
}

/// Generates a motivational letter for `job_title`, optionally grounded in a
/// job description, in the requested language.
///
/// Total function: validation failures, client errors, and blank model output
/// all come back as a failed [`Outcome`], never as an `Err` or a panic.
pub async fn generate_letter(
    client: &dyn CompletionClient,
    job_title: &str,
    job_description: &str,
    language_code: &str,
) -> Outcome<GeneratedLetter> {
    let title = job_title.trim();
    if title.is_empty() {
        return Outcome::failed("job_title is required");
    }

    let language = language::normalize(language_code);
    let job_context = match job_description.trim() {
        "" => String::new(),
        description => prompts::JOB_DESCRIPTION_CONTEXT.replace("{job_description}", description),
    };

    let prompt = prompts::LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", title)
        .replace("{job_context}", &job_context)
        .replace("{language_instruction}", language::instruction_for(language));

    match client.complete(&prompt, SamplingParams::default()).await {
        Ok(text) => {
            let letter = text.trim().to_string();
            if letter.is_empty() {
                return Outcome::failed("Failed to generate motivational letter");
            }
            Outcome::generated(GeneratedLetter {
                letter,
                language: language.to_string(),
            })
        }
        Err(e) => Outcome::failed(format!("Error generating motivational letter: {e}")),
    }
}
