//! Axum route handlers for generating, searching and exporting jokes.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::composer::{combine, echo_input, generate};
use crate::db::{SearchQuery, DEFAULT_SEARCH_LIMIT};
use crate::errors::AppError;
use crate::export::{export_filename, records_to_csv};
use crate::models::{JokeRecord, NewJoke};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateJokeRequest {
    pub template_key: String,
    pub user_input: String,
    #[serde(default)]
    pub add_on: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateJokeResponse {
    pub id: i64,
    pub template_key: String,
    pub template_name: String,
    pub echoed_input: String,
    pub combined_input: String,
    pub generated_joke: String,
}

/// Query string shared by search and export.
/// `templates` is a comma-separated list of template keys.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub templates: Option<String>,
    pub limit: Option<i64>,
}

impl SearchParams {
    pub fn to_query(&self) -> SearchQuery {
        let keys = self
            .templates
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty());
        SearchQuery::default()
            .with_text(self.q.as_str())
            .with_templates(keys)
            .with_limit(self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub jokes: Vec<JokeRecord>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_jokes: i64,
    pub latest_save: String,
    pub storage: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jokes
///
/// Generates a joke with the active composer and saves it.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateJokeRequest>,
) -> Result<Json<GenerateJokeResponse>, AppError> {
    if request.user_input.trim().is_empty() {
        return Err(AppError::Validation("Add some input text first.".to_string()));
    }

    let template = state.templates.get(&request.template_key)?;
    let generated = generate(
        state.composer.as_ref(),
        &state.templates,
        template.key,
        &request.user_input,
        &request.add_on,
    )
    .await?;

    let id = state
        .store
        .save(NewJoke {
            template_key: template.key,
            template_name: template.name,
            user_input: &request.user_input,
            add_on: &request.add_on,
            generated_joke: &generated,
        })
        .await?;

    Ok(Json(GenerateJokeResponse {
        id,
        template_key: template.key.to_string(),
        template_name: template.name.to_string(),
        echoed_input: echo_input(&request.user_input),
        combined_input: combine(&request.user_input, &request.add_on),
        generated_joke: generated,
    }))
}

/// GET /api/v1/jokes?q=&templates=a,b&limit=
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let jokes = state.store.search(&params.to_query()).await?;
    Ok(Json(SearchResponse {
        count: jokes.len(),
        jokes,
    }))
}

/// GET /api/v1/jokes/export
///
/// Same filters as search, returned as a CSV attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let jokes = state.store.search(&params.to_query()).await?;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(Utc::now()));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        records_to_csv(&jokes),
    ))
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.store.stats().await?;
    Ok(Json(StatsResponse {
        total_jokes: stats.total_jokes,
        latest_save: stats.latest_save,
        storage: state.store.label(),
    }))
}
