use std::sync::Arc;

use crate::config::Config;
use crate::gemini::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once at startup; the resolved credential lives inside the completion
/// client and is immutable for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Completion capability behind a trait so tests can swap in a scripted client.
    pub completion: Arc<dyn CompletionClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, config: Config) -> Self {
        AppState { completion, config }
    }
}
