//! JobFit server: a local-first HTTP API that turns job postings into
//! application artifacts (motivational letters, cover letters, resume
//! analysis, interview prep) through the Gemini API.

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod generation;
pub mod routes;
pub mod state;
