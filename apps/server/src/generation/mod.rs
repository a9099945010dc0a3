// Generation operations for job-application artifacts.
// All model calls go through gemini::CompletionClient, never the API directly.

pub mod analysis;
pub mod cover_letter;
pub mod handlers;
pub mod interview;
pub mod language;
pub mod letter;
pub mod outcome;
pub mod prompts;
