use std::sync::Arc;

use crate::interview::session::SessionStore;
use crate::jobs::JobSearchClient;
use crate::llm_client::LlmInvoke;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generative-model client behind a trait object so tests (and future
    /// providers) can swap the implementation.
    pub llm: Arc<dyn LlmInvoke>,
    pub jobs: JobSearchClient,
    pub sessions: SessionStore,
}
