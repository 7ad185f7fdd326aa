use std::sync::Arc;

use crate::chat::session::SessionStore;
use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory, session-lifetime conversation state. No persistence.
    pub sessions: SessionStore,
    /// Pluggable model client. Production: GeminiClient. Tests swap in a script.
    pub llm: Arc<dyn ModelClient>,
    pub config: Config,
}
