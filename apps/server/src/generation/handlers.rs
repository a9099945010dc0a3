//! Axum route handlers for the generation API.
//!
//! Every handler answers HTTP 200 and reports success or failure in-band
//! through the [`Outcome`] envelope; the frontend branches on the `success`
//! flag, not the status code. Missing optional fields default to empty via
//! serde and are validated inside the operations.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::generation::analysis::{analyze_resume, AnalysisReport, JobDetail};
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::interview::{generate_interview_prep, InterviewPrep};
use crate::generation::letter::{generate_letter, GeneratedLetter};
use crate::generation::outcome::Outcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_details: Vec<JobDetail>,
    #[serde(default)]
    pub custom_instructions: String,
    #[serde(default)]
    pub language: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/motivational-letter
pub async fn handle_motivational_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Json<Outcome<GeneratedLetter>> {
    Json(
        generate_letter(
            state.completion.as_ref(),
            &request.job_title,
            &request.job_description,
            &request.language,
        )
        .await,
    )
}

/// POST /api/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Json<Outcome<GeneratedLetter>> {
    Json(
        generate_cover_letter(
            state.completion.as_ref(),
            &request.job_title,
            &request.company,
            &request.job_description,
            &request.language,
        )
        .await,
    )
}

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<Outcome<AnalysisReport>> {
    Json(
        analyze_resume(
            state.completion.as_ref(),
            &request.resume_text,
            &request.job_details,
            &request.custom_instructions,
            &request.language,
        )
        .await,
    )
}

/// POST /api/interview-prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Json<Outcome<InterviewPrep>> {
    Json(
        generate_interview_prep(
            state.completion.as_ref(),
            &request.job_title,
            &request.job_description,
            &request.language,
        )
        .await,
    )
}
