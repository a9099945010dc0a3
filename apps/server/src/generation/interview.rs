//! Interview preparation: likely questions for a role with guidance on what a
//! strong answer covers.

use serde::Serialize;

use crate::gemini::{CompletionClient, SamplingParams};
use crate::generation::language;
use crate::generation::outcome::Outcome;
use crate::generation::prompts;

#[derive(Debug, Serialize)]
pub struct InterviewPrep {
    pub questions: String,
    pub language: String,
}

pub async fn generate_interview_prep(
    client: &dyn CompletionClient,
    job_title: &str,
    job_description: &str,
    language_code: &str,
) -> Outcome<InterviewPrep> {
    let title = job_title.trim();
    if title.is_empty() {
        return Outcome::failed("job_title is required");
    }

    let language = language::normalize(language_code);
    let job_context = match job_description.trim() {
        "" => String::new(),
        description => prompts::ANALYSIS_JOB_CONTEXT.replace("{job_description}", description),
    };

    let prompt = prompts::INTERVIEW_PROMPT_TEMPLATE
        .replace("{job_title}", title)
        .replace("{job_context}", &job_context)
        .replace("{language_instruction}", language::instruction_for(language));

    match client.complete(&prompt, SamplingParams::default()).await {
        Ok(text) => {
            let questions = text.trim().to_string();
            if questions.is_empty() {
                return Outcome::failed("Failed to generate interview questions");
            }
            Outcome::generated(InterviewPrep {
                questions,
                language: language.to_string(),
            })
        }
        Err(e) => Outcome::failed(format!("Error generating interview questions: {e}")),
    }
}
