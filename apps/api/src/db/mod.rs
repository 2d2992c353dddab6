//! Joke Store — append-only persistence of generated jokes.
//!
//! One table, insert-only. `JokeStore` is implemented for Postgres and
//! SQLite; `connect` picks the backend from the URL scheme. Both backends
//! share the search SQL through `push_search`.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Database, Encode, QueryBuilder, Type};
use tracing::info;

use crate::errors::JokeError;
use crate::models::{JokeRecord, JokeStats, NewJoke};

pub mod postgres;
pub mod sqlite;

pub use postgres::PgJokeStore;
pub use sqlite::SqliteJokeStore;

pub const DEFAULT_SEARCH_LIMIT: i64 = 50;
pub const MIN_SEARCH_LIMIT: i64 = 1;
pub const MAX_SEARCH_LIMIT: i64 = 500;

pub(crate) const SELECT_COLUMNS: &str = "SELECT id, created_at, template_key, template_name, user_input, \
    add_on, generated_joke FROM jokes WHERE 1 = 1";

const SEARCH_COLUMNS: &[&str] = &["user_input", "add_on", "generated_joke", "template_name"];

/// Filters for `JokeStore::search`. Filters combine with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against input, add-on, joke and
    /// template name. Blank means no text filter.
    pub search_text: String,
    /// Allowed template keys. Empty means all.
    pub template_keys: Vec<String>,
    /// Clamped to `[MIN_SEARCH_LIMIT, MAX_SEARCH_LIMIT]` when the query runs.
    pub limit: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            template_keys: Vec::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchQuery {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_templates<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

/// Storage for joke records.
#[async_trait]
pub trait JokeStore: Send + Sync {
    /// Human-readable backend name, e.g. `SQLite (local file)`.
    fn label(&self) -> String;

    /// Creates the table and index if missing. Safe to call repeatedly.
    async fn initialize(&self) -> Result<(), JokeError>;

    /// Inserts one record in its own transaction and returns the new id.
    async fn save(&self, joke: NewJoke<'_>) -> Result<i64, JokeError>;

    /// Matching records, newest id first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JokeRecord>, JokeError>;

    async fn stats(&self) -> Result<JokeStats, JokeError>;
}

/// Opens the store named by `database_url`.
pub async fn connect(database_url: &str) -> Result<Arc<dyn JokeStore>, JokeError> {
    let store: Arc<dyn JokeStore> = if is_postgres_url(database_url) {
        Arc::new(PgJokeStore::connect(database_url).await?)
    } else if database_url.starts_with("sqlite:") {
        Arc::new(SqliteJokeStore::connect(database_url).await?)
    } else {
        return Err(JokeError::StorageInit {
            backend: "unsupported database".to_string(),
            source: sqlx::Error::Configuration(
                "DATABASE_URL must start with postgres://, postgresql:// or sqlite:".into(),
            ),
        });
    };
    info!("Storage backend: {}", store.label());
    Ok(store)
}

fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(MIN_SEARCH_LIMIT, MAX_SEARCH_LIMIT)
}

/// `%text%` with LIKE metacharacters escaped, or `None` for blank text.
pub fn like_pattern(search_text: &str) -> Option<String> {
    let text = search_text.trim();
    if text.is_empty() {
        return None;
    }
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/// Appends the search filters, ordering and limit to a builder started
/// from `SELECT_COLUMNS`.
/// `like_operator` is `ILIKE` on Postgres and `LIKE` on SQLite.
pub(crate) fn push_search<'args, DB>(
    builder: &mut QueryBuilder<'args, DB>,
    query: &SearchQuery,
    like_operator: &str,
) where
    DB: Database,
    String: Encode<'args, DB> + Type<DB>,
    i64: Encode<'args, DB> + Type<DB>,
{
    if let Some(pattern) = like_pattern(&query.search_text) {
        builder.push(" AND (");
        for (i, column) in SEARCH_COLUMNS.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(format!("{column} {like_operator} "));
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\'");
        }
        builder.push(")");
    }

    if !query.template_keys.is_empty() {
        builder.push(" AND template_key IN (");
        for (i, key) in query.template_keys.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push_bind(key.clone());
        }
        builder.push(")");
    }

    builder.push(" ORDER BY id DESC LIMIT ");
    builder.push_bind(clamp_limit(query.limit));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(-20), 1);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(10_000), 500);
    }

    #[test]
    fn test_like_pattern_trims_and_escapes() {
        assert_eq!(like_pattern("   "), None);
        assert_eq!(like_pattern(" hello "), Some("%hello%".to_string()));
        assert_eq!(
            like_pattern("100%_off\\"),
            Some("%100\\%\\_off\\\\%".to_string())
        );
    }

    #[test]
    fn test_search_sql_shape() {
        let query = SearchQuery::default()
            .with_text("cat")
            .with_templates(["a", "c"])
            .with_limit(3);
        let mut builder = QueryBuilder::<sqlx::Sqlite>::new(SELECT_COLUMNS);
        push_search(&mut builder, &query, "LIKE");
        let sql = builder.sql();
        assert!(sql.contains("user_input LIKE ? ESCAPE '\\'"), "{sql}");
        assert!(sql.contains("template_name LIKE ?"), "{sql}");
        assert!(sql.contains("template_key IN (?, ?)"), "{sql}");
        assert!(sql.ends_with("ORDER BY id DESC LIMIT ?"), "{sql}");
    }

    #[test]
    fn test_search_sql_without_filters() {
        let mut builder = QueryBuilder::<sqlx::Postgres>::new(SELECT_COLUMNS);
        push_search(&mut builder, &SearchQuery::default(), "ILIKE");
        let sql = builder.sql();
        assert!(!sql.contains("ILIKE"), "{sql}");
        assert!(!sql.contains("IN ("), "{sql}");
        assert!(sql.ends_with("ORDER BY id DESC LIMIT $1"), "{sql}");
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let err = connect("mysql://localhost/jokes").await.err().unwrap();
        assert!(matches!(err, JokeError::StorageInit { .. }));
    }
}
