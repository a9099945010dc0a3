//! Resume analysis against one or more target jobs, plus an ATS
//! compatibility pass over the resume alone.
//!
//! One completion per job, then one for the ATS evaluation. A job analysis
//! failure fails the whole request; an ATS failure only drops the optional
//! `ats_analysis` field.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gemini::{CompletionClient, SamplingParams};
use crate::generation::language;
use crate::generation::outcome::Outcome;
use crate::generation::prompts;

#[derive(Debug, Clone, Deserialize)]
pub struct JobDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct JobMatch {
    pub job_title: String,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub results: Vec<JobMatch>,
    pub ats_analysis: Option<String>,
}

pub async fn analyze_resume(
    client: &dyn CompletionClient,
    resume_text: &str,
    jobs: &[JobDetail],
    custom_instructions: &str,
    language_code: &str,
) -> Outcome<AnalysisReport> {
    let resume = resume_text.trim();
    if resume.is_empty() {
        return Outcome::failed("resume is required");
    }
    if jobs.is_empty() {
        return Outcome::failed("at least one job is required");
    }
    if jobs.iter().any(|job| job.title.trim().is_empty()) {
        return Outcome::failed("job title is required");
    }

    let language = language::normalize(language_code);
    let instruction = language::instruction_for(language);
    let extra_instructions = match custom_instructions.trim() {
        "" => String::new(),
        text => prompts::CUSTOM_INSTRUCTIONS_CONTEXT.replace("{custom_instructions}", text),
    };

    let mut results = Vec::with_capacity(jobs.len());
    for job in jobs {
        let job_context = match job.description.trim() {
            "" => String::new(),
            description => prompts::ANALYSIS_JOB_CONTEXT.replace("{job_description}", description),
        };
        let prompt = prompts::ANALYSIS_PROMPT_TEMPLATE
            .replace("{job_title}", job.title.trim())
            .replace("{resume}", resume)
            .replace("{job_context}", &job_context)
            .replace("{extra_instructions}", &extra_instructions)
            .replace("{language_instruction}", instruction);

        match client.complete(&prompt, SamplingParams::default()).await {
            Ok(text) if !text.trim().is_empty() => results.push(JobMatch {
                job_title: job.title.trim().to_string(),
                analysis: text.trim().to_string(),
            }),
            Ok(_) => return Outcome::failed("Failed to analyze resume"),
            Err(e) => return Outcome::failed(format!("Error analyzing resume: {e}")),
        }
    }

    let ats_prompt = prompts::ATS_PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{language_instruction}", instruction);
    let ats_analysis = match client.complete(&ats_prompt, SamplingParams::default()).await {
        Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            warn!("ATS compatibility pass failed: {e}");
            None
        }
    };

    Outcome::generated(AnalysisReport {
        results,
        ats_analysis,
    })
}
