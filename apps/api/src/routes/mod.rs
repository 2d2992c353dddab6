pub mod health;
pub mod jokes;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/keys", get(templates::handle_list_template_keys))
        .route("/api/v1/templates/:key", get(templates::handle_get_template))
        // Jokes
        .route(
            "/api/v1/jokes",
            post(jokes::handle_generate).get(jokes::handle_search),
        )
        .route("/api/v1/jokes/export", get(jokes::handle_export))
        .route("/api/v1/stats", get(jokes::handle_stats))
        .with_state(state)
}
