use std::sync::Arc;

use crate::config::Config;
use crate::render::TemplateRegistry;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// All live editing sessions; each holds one document.
    pub sessions: Arc<SessionStore>,
    /// Template name → renderer mapping with a fallback default.
    pub templates: Arc<TemplateRegistry>,
    pub config: Config,
}
