use std::str::FromStr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/jokes.db";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which joke composer is active for this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerKind {
    Remote,
    Local,
}

impl FromStr for ComposerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(ComposerKind::Remote),
            "local" => Ok(ComposerKind::Local),
            other => bail!("JOKE_COMPOSER must be 'remote' or 'local', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Only malformed values fail at startup; a missing API key is reported
/// when a remote generation is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub composer: ComposerKind,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let composer = match get("JOKE_COMPOSER") {
            Some(raw) => raw.parse()?,
            None => ComposerKind::Remote,
        };

        Ok(Config {
            database_url: get("DATABASE_URL")
                .or_else(|| get("SUPABASE_DB_URL"))
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            composer,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
