//! SQLite implementation of JokeStore
//!
//! `created_at` is TEXT holding naive UTC (`YYYY-MM-DD HH:MM:SS.ffffff`), the
//! same shape as `CURRENT_TIMESTAMP`, so `MAX(created_at)` sorts correctly.

use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info};

use crate::db::{push_search, JokeStore, SearchQuery, SELECT_COLUMNS};
use crate::errors::{JokeError, ReadTarget};
use crate::models::timestamp;
use crate::models::{JokeRecord, JokeStats, NewJoke};

pub const SQLITE_LABEL: &str = "SQLite (local file)";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS jokes (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at     TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        template_key   VARCHAR(100) NOT NULL,
        template_name  VARCHAR(255) NOT NULL,
        user_input     TEXT NOT NULL,
        add_on         TEXT NOT NULL DEFAULT '',
        generated_joke TEXT NOT NULL
    )
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_jokes_template_key ON jokes (template_key)";

pub struct SqliteJokeStore {
    pool: SqlitePool,
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct JokeRow {
    id: i64,
    created_at: String,
    template_key: String,
    template_name: String,
    user_input: String,
    add_on: String,
    generated_joke: String,
}

impl TryFrom<JokeRow> for JokeRecord {
    type Error = sqlx::Error;

    fn try_from(row: JokeRow) -> Result<Self, Self::Error> {
        let created_at = timestamp::parse_stored(&row.created_at).ok_or_else(|| {
            sqlx::Error::Decode(format!("invalid created_at '{}'", row.created_at).into())
        })?;
        Ok(Self {
            id: row.id,
            created_at,
            template_key: row.template_key,
            template_name: row.template_name,
            user_input: row.user_input,
            add_on: row.add_on,
            generated_joke: row.generated_joke,
        })
    }
}

impl SqliteJokeStore {
    /// Opens (and creates, if missing) the database file. In-memory URLs get
    /// a single long-lived connection so every query sees the same database.
    pub async fn connect(database_url: &str) -> Result<Self, JokeError> {
        let init_error = |source: sqlx::Error| JokeError::StorageInit {
            backend: SQLITE_LABEL.to_string(),
            source,
        };

        let in_memory = is_in_memory(database_url);
        if !in_memory {
            let parent = database_file(database_url).and_then(|p| p.parent().map(PathBuf::from));
            if let Some(parent) = parent {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(&parent)
                        .map_err(|e| init_error(sqlx::Error::Io(e)))?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(init_error)?
            .create_if_missing(true);

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(init_error)?;

        info!("SQLite database opened: {database_url}");
        Ok(Self { pool })
    }

    fn read_error(target: ReadTarget, source: sqlx::Error) -> JokeError {
        JokeError::StorageRead {
            backend: SQLITE_LABEL.to_string(),
            target,
            source,
        }
    }

    fn write_error(source: sqlx::Error) -> JokeError {
        JokeError::StorageWrite {
            backend: SQLITE_LABEL.to_string(),
            source,
        }
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Filesystem path named by a `sqlite:` URL, without query parameters.
fn database_file(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

#[async_trait]
impl JokeStore for SqliteJokeStore {
    fn label(&self) -> String {
        SQLITE_LABEL.to_string()
    }

    async fn initialize(&self) -> Result<(), JokeError> {
        for statement in [CREATE_TABLE, CREATE_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|source| JokeError::StorageInit {
                    backend: SQLITE_LABEL.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    async fn save(&self, joke: NewJoke<'_>) -> Result<i64, JokeError> {
        let mut tx = self.pool.begin().await.map_err(Self::write_error)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO jokes
                (created_at, template_key, template_name, user_input, add_on, generated_joke)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(timestamp::to_stored(&Utc::now()))
        .bind(joke.template_key)
        .bind(joke.template_name)
        .bind(joke.user_input.trim())
        .bind(joke.add_on.trim())
        .bind(joke.generated_joke)
        .fetch_one(&mut *tx)
        .await
        .map_err(Self::write_error)?;

        tx.commit().await.map_err(Self::write_error)?;

        info!("Saved joke #{id} (template {})", joke.template_key);
        Ok(id)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<JokeRecord>, JokeError> {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_COLUMNS);
        push_search(&mut builder, query, "LIKE");

        let rows = builder
            .build_query_as::<JokeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::read_error(ReadTarget::Jokes, e))?;

        debug!("Search returned {} row(s)", rows.len());
        rows.into_iter()
            .map(|row| {
                JokeRecord::try_from(row).map_err(|e| Self::read_error(ReadTarget::Jokes, e))
            })
            .collect()
    }

    async fn stats(&self) -> Result<JokeStats, JokeError> {
        let (total, latest): (i64, Option<String>) =
            sqlx::query_as("SELECT COUNT(*), MAX(created_at) FROM jokes")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| Self::read_error(ReadTarget::Stats, e))?;

        let latest = match latest {
            Some(text) => Some(timestamp::parse_stored(&text).ok_or_else(|| {
                Self::read_error(
                    ReadTarget::Stats,
                    sqlx::Error::Decode(format!("invalid created_at '{text}'").into()),
                )
            })?),
            None => None,
        };

        Ok(JokeStats::new(total, latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::joke::NO_JOKES_YET;

    async fn memory_store() -> SqliteJokeStore {
        let store = SqliteJokeStore::connect("sqlite::memory:").await.unwrap();
        store.initialize().await.unwrap();
        store
    }

    fn joke<'a>(key: &'a str, input: &'a str, generated: &'a str) -> NewJoke<'a> {
        NewJoke {
            template_key: key,
            template_name: "Template",
            user_input: input,
            add_on: "",
            generated_joke: generated,
        }
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let store = memory_store().await;
        store.initialize().await.unwrap();
        store.initialize().await.unwrap();
        assert_eq!(store.stats().await.unwrap().total_jokes, 0);
    }

    #[tokio::test]
    async fn test_save_then_search_round_trip() {
        let store = memory_store().await;
        let id = store
            .save(NewJoke {
                template_key: "ironie",
                template_name: "Ironie (Irony)",
                user_input: "  I deployed on Friday \n",
                add_on: "  at midnight ",
                generated_joke: "  Brilliant timing.  ",
            })
            .await
            .unwrap();

        let found = store
            .search(&SearchQuery::default().with_limit(1))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        let record = &found[0];
        assert_eq!(record.id, id);
        assert_eq!(record.template_key, "ironie");
        assert_eq!(record.template_name, "Ironie (Irony)");
        assert_eq!(record.user_input, "I deployed on Friday");
        assert_eq!(record.add_on, "at midnight");
        assert_eq!(record.generated_joke, "  Brilliant timing.  ");
    }

    #[tokio::test]
    async fn test_ids_increase_and_search_is_newest_first() {
        let store = memory_store().await;
        let r1 = store.save(joke("a", "one", "j1")).await.unwrap();
        let r2 = store.save(joke("a", "two", "j2")).await.unwrap();
        let r3 = store.save(joke("a", "three", "j3")).await.unwrap();
        assert!(r1 < r2 && r2 < r3);

        let ids: Vec<i64> = store
            .search(&SearchQuery::default().with_limit(3))
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![r3, r2, r1]);
    }

    #[tokio::test]
    async fn test_template_filter() {
        let store = memory_store().await;
        let a = store.save(joke("a", "x", "j")).await.unwrap();
        store.save(joke("b", "x", "j")).await.unwrap();
        let c = store.save(joke("c", "x", "j")).await.unwrap();

        let found = store
            .search(&SearchQuery::default().with_templates(["a", "c"]))
            .await
            .unwrap();
        let ids: Vec<i64> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![c, a]);
        assert!(found.iter().all(|r| r.template_key != "b"));
    }

    #[tokio::test]
    async fn test_text_search_is_case_insensitive_across_columns() {
        let store = memory_store().await;
        let joke_hit = store.save(joke("a", "plain", "Hello World")).await.unwrap();
        let input_hit = store.save(joke("a", "HELLO there", "other")).await.unwrap();
        store.save(joke("a", "nothing", "to see")).await.unwrap();

        let ids: Vec<i64> = store
            .search(&SearchQuery::default().with_text("  hello "))
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![input_hit, joke_hit]);

        let by_name = store
            .search(&SearchQuery::default().with_text("templ"))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 3);
    }

    #[tokio::test]
    async fn test_text_and_template_filters_combine() {
        let store = memory_store().await;
        store.save(joke("a", "cat", "j")).await.unwrap();
        let hit = store.save(joke("b", "cat", "j")).await.unwrap();
        store.save(joke("b", "dog", "j")).await.unwrap();

        let found = store
            .search(&SearchQuery::default().with_text("cat").with_templates(["b"]))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, hit);
    }

    #[tokio::test]
    async fn test_like_wildcards_are_literal() {
        let store = memory_store().await;
        let hit = store.save(joke("a", "50% off", "j")).await.unwrap();
        store.save(joke("a", "500 off", "j")).await.unwrap();

        let found = store
            .search(&SearchQuery::default().with_text("50%"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, hit);
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let store = memory_store().await;
        for i in 0..3 {
            store.save(joke("a", &format!("n{i}"), "j")).await.unwrap();
        }
        let zero = store
            .search(&SearchQuery::default().with_limit(0))
            .await
            .unwrap();
        assert_eq!(zero.len(), 1);

        let huge = store
            .search(&SearchQuery::default().with_limit(10_000))
            .await
            .unwrap();
        assert_eq!(huge.len(), 3);
    }

    #[tokio::test]
    async fn test_large_limit_stops_at_five_hundred_rows() {
        let store = memory_store().await;
        sqlx::query(
            "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 501) \
             INSERT INTO jokes (template_key, template_name, user_input, generated_joke) \
             SELECT 'a', 'A', 'bulk ' || i, 'j' FROM n",
        )
        .execute(&store.pool)
        .await
        .unwrap();
        assert_eq!(store.stats().await.unwrap().total_jokes, 501);

        let found = store
            .search(&SearchQuery::default().with_limit(10_000))
            .await
            .unwrap();
        assert_eq!(found.len(), 500);
        assert_eq!(found[0].user_input, "bulk 501");
    }

    #[tokio::test]
    async fn test_missing_schema_surfaces_storage_errors() {
        let store = SqliteJokeStore::connect("sqlite::memory:").await.unwrap();

        let err = store.save(joke("a", "x", "j")).await.unwrap_err();
        assert!(matches!(err, JokeError::StorageWrite { .. }), "{err:?}");
        assert_eq!(
            err.to_string(),
            "Could not save joke to database (SQLite (local file))."
        );

        let err = store.search(&SearchQuery::default()).await.unwrap_err();
        assert!(
            matches!(err, JokeError::StorageRead { target: ReadTarget::Jokes, .. }),
            "{err:?}"
        );
        assert_eq!(
            err.to_string(),
            "Could not read jokes from database (SQLite (local file))."
        );

        let err = store.stats().await.unwrap_err();
        assert!(
            matches!(err, JokeError::StorageRead { target: ReadTarget::Stats, .. }),
            "{err:?}"
        );
        assert_eq!(
            err.to_string(),
            "Could not read database stats (SQLite (local file))."
        );

        store.initialize().await.unwrap();
        assert_eq!(store.stats().await.unwrap().total_jokes, 0);
    }

    #[tokio::test]
    async fn test_stats_empty_then_after_save() {
        let store = memory_store().await;
        assert_eq!(
            store.stats().await.unwrap(),
            JokeStats {
                total_jokes: 0,
                latest_save: NO_JOKES_YET.to_string()
            }
        );

        store.save(joke("a", "x", "j")).await.unwrap();
        let record = store.search(&SearchQuery::default()).await.unwrap().remove(0);
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_jokes, 1);
        assert_eq!(stats.latest_save, record.created_at_label());
    }

    #[tokio::test]
    async fn test_naive_default_timestamps_are_read_as_utc() {
        let store = memory_store().await;
        sqlx::query(
            "INSERT INTO jokes (created_at, template_key, template_name, user_input, generated_joke) \
             VALUES ('2024-02-03 04:05:06', 'a', 'A', 'legacy', 'j')",
        )
        .execute(&store.pool)
        .await
        .unwrap();

        let record = store.search(&SearchQuery::default()).await.unwrap().remove(0);
        assert_eq!(record.created_at_label(), "2024-02-03T04:05:06+00:00");
        assert_eq!(record.add_on, "");
        assert_eq!(store.stats().await.unwrap().latest_save, "2024-02-03T04:05:06+00:00");
    }

    #[tokio::test]
    async fn test_file_database_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("jokes.db");
        let url = format!("sqlite://{}", path.display());

        let store = SqliteJokeStore::connect(&url).await.unwrap();
        store.initialize().await.unwrap();
        store.save(joke("a", "x", "j")).await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_database_file_parsing() {
        assert_eq!(
            database_file("sqlite://data/jokes.db"),
            Some(PathBuf::from("data/jokes.db"))
        );
        assert_eq!(
            database_file("sqlite:jokes.db?mode=rwc"),
            Some(PathBuf::from("jokes.db"))
        );
        assert!(is_in_memory("sqlite::memory:"));
        assert!(!is_in_memory("sqlite://data/jokes.db"));
    }
}
