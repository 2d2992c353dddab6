use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// What a failed storage read was after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTarget {
    Jokes,
    Stats,
}

impl fmt::Display for ReadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadTarget::Jokes => f.write_str("jokes from database"),
            ReadTarget::Stats => f.write_str("database stats"),
        }
    }
}

/// Failures raised by the template registry, the composers and the joke store.
///
/// Storage variants carry the backend label so the message tells the user
/// which database was involved.
#[derive(Debug, Error)]
pub enum JokeError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Dependency(String),

    #[error("Text generation request failed: {0}")]
    RemoteCall(String),

    #[error("Text generation returned an empty response.")]
    EmptyResponse,

    #[error("Could not initialize database ({backend}).")]
    StorageInit {
        backend: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Could not save joke to database ({backend}).")]
    StorageWrite {
        backend: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Could not read {target} ({backend}).")]
    StorageRead {
        backend: String,
        target: ReadTarget,
        #[source]
        source: sqlx::Error,
    },
}

/// HTTP-facing error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Joke(#[from] JokeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Joke(err) => match err {
                JokeError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                JokeError::Configuration(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "CONFIGURATION_ERROR")
                }
                JokeError::Dependency(_) => (StatusCode::SERVICE_UNAVAILABLE, "DEPENDENCY_ERROR"),
                JokeError::RemoteCall(_) => (StatusCode::BAD_GATEWAY, "REMOTE_CALL_ERROR"),
                JokeError::EmptyResponse => (StatusCode::BAD_GATEWAY, "EMPTY_RESPONSE"),
                JokeError::StorageInit { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_INIT_ERROR")
                }
                JokeError::StorageWrite { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_WRITE_ERROR")
                }
                JokeError::StorageRead { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_READ_ERROR")
                }
            },
        };

        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Joke(err) => {
                if status.is_server_error() {
                    tracing::error!("{code}: {err:?}");
                }
                err.to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
