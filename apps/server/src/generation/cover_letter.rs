//! Cover letter generation. Same contract as the motivational letter, with an
//! optional company name folded into the prompt.

use crate::gemini::{CompletionClient, SamplingParams};
use crate::generation::language;
use crate::generation::letter::GeneratedLetter;
use crate::generation::outcome::Outcome;
use crate::generation::prompts;

pub async fn generate_cover_letter(
    client: &dyn CompletionClient,
    job_title: &str,
    company: &str,
    job_description: &str,
    language_code: &str,
) -> Outcome<GeneratedLetter> {
    let title = job_title.trim();
    if title.is_empty() {
        return Outcome::failed("job_title is required");
    }

    let language = language::normalize(language_code);
    let company_context = match company.trim() {
        "" => String::new(),
        name => prompts::COMPANY_CONTEXT.replace("{company}", name),
    };
    let job_context = match job_description.trim() {
        "" => String::new(),
        description => prompts::JOB_DESCRIPTION_CONTEXT.replace("{job_description}", description),
    };

    let prompt = prompts::COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", title)
        .replace("{company_context}", &company_context)
        .replace("{job_context}", &job_context)
        .replace("{language_instruction}", language::instruction_for(language));

    match client.complete(&prompt, SamplingParams::default()).await {
        Ok(text) => {
            let letter = text.trim().to_string();
            if letter.is_empty() {
                return Outcome::failed("Failed to generate cover letter");
            }
            Outcome::generated(GeneratedLetter {
                letter,
                language: language.to_string(),
            })
        }
        Err(e) => Outcome::failed(format!("Error generating cover letter: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::CompletionError;
    use crate::generation::testing::StubCompletion;

    #[tokio::test]
    async fn test_company_name_is_folded_into_prompt() {
        let stub = StubCompletion::returning("Dear team,");
        let outcome =
            generate_cover_letter(&stub, "Data Engineer", "Acme Corp", "", "en").await;

        assert!(outcome.success);
        let prompt = stub.prompt(0);
        assert!(prompt.contains("The candidate is applying to Acme Corp."));
        assert!(prompt.contains("Write a complete cover letter for a Data Engineer position."));
    }

    #[tokio::test]
    async fn test_blank_company_omits_the_company_block() {
        let stub = StubCompletion::returning("Dear team,");
        generate_cover_letter(&stub, "Data Engineer", "  ", "", "en").await;

        assert!(!stub.prompt(0).contains("The candidate is applying to"));
    }

    #[tokio::test]
    async fn test_blank_title_fails_without_spending_an_api_call() {
        let stub = StubCompletion::returning("never used");
        let outcome = generate_cover_letter(&stub, "", "Acme Corp", "", "en").await;

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("job_title is required"));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_client_error_becomes_failed_outcome() {
        let stub = StubCompletion::scripted(vec![Err(CompletionError::Empty)]);
        let outcome = generate_cover_letter(&stub, "Data Engineer", "", "", "en").await;

        assert!(!outcome.success);
        assert!(outcome
            .error
            .unwrap()
            .starts_with("Error generating cover letter: "));
    }
}
