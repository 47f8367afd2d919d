use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// The upstream model, behind the `CompletionClient` seam so tests can
    /// substitute a canned model. `None` when OPENAI_API_KEY is absent;
    /// endpoints that need the model report a configuration error before any
    /// network I/O.
    pub llm: Option<Arc<dyn CompletionClient>>,
}
