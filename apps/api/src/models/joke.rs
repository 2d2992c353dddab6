use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::timestamp;

/// `latest_save` label used when the store has no rows.
pub const NO_JOKES_YET: &str = "No jokes yet";

/// One persisted generation. Read-only once stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JokeRecord {
    pub id: i64,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    pub template_key: String,
    pub template_name: String,
    pub user_input: String,
    pub add_on: String,
    pub generated_joke: String,
}

impl JokeRecord {
    pub fn created_at_label(&self) -> String {
        timestamp::format_utc(&self.created_at)
    }
}

/// Insert parameters. `user_input` and `add_on` are trimmed by the store;
/// `generated_joke` is stored verbatim.
#[derive(Debug, Clone, Copy)]
pub struct NewJoke<'a> {
    pub template_key: &'a str,
    pub template_name: &'a str,
    pub user_input: &'a str,
    pub add_on: &'a str,
    pub generated_joke: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JokeStats {
    pub total_jokes: i64,
    /// Formatted `created_at` of the newest row, or `NO_JOKES_YET`.
    pub latest_save: String,
}

impl JokeStats {
    pub fn new(total_jokes: i64, latest: Option<DateTime<Utc>>) -> Self {
        Self {
            total_jokes,
            latest_save: latest
                .map(|ts| timestamp::format_utc(&ts))
                .unwrap_or_else(|| NO_JOKES_YET.to_string()),
        }
    }
}
