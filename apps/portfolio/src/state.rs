use std::sync::Arc;

use crate::contact::relay::ContactRelay;
use crate::content::ContentStore;
use crate::views::ViewEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only site content, loaded once at startup.
    pub content: Arc<ContentStore>,
    pub views: Arc<ViewEngine>,
    /// Pluggable contact relay. Default: EmailJsRelay.
    pub relay: Arc<dyn ContactRelay>,
}
