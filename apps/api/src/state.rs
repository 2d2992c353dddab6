use std::sync::Arc;

use crate::composer::JokeComposer;
use crate::db::JokeStore;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JokeStore>,
    /// Active joke backend, chosen once at startup from `JOKE_COMPOSER`.
    pub composer: Arc<dyn JokeComposer>,
    pub templates: TemplateRegistry,
}
