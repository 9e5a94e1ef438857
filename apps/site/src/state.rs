use crate::config::Config;
use crate::contact::ContactService;
use crate::content::ContentProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Validated resume document, loaded once at startup.
    pub content: ContentProvider,
    pub contact: ContactService,
    pub config: Config,
}
