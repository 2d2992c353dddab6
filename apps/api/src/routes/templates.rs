//! Read-only template catalog endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::HumorTemplate;

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Json<&'static [HumorTemplate]> {
    Json(state.templates.list())
}

/// GET /api/v1/templates/keys
pub async fn handle_list_template_keys(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.templates.keys())
}

/// GET /api/v1/templates/:key
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<&'static HumorTemplate>, AppError> {
    Ok(Json(state.templates.get(&key)?))
}
