//! Joke Composer — turns a template and raw user text into joke text.
//!
//! Two backends sit behind `JokeComposer`: `RemoteComposer` (text-generation
//! API) and `LocalComposer` (randomised phrasebook). `AppState` holds one as
//! `Arc<dyn JokeComposer>`, chosen at startup from `JOKE_COMPOSER`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::{ComposerKind, Config};
use crate::errors::JokeError;
use crate::llm_client::LlmClient;
use crate::templates::{HumorTemplate, TemplateRegistry};

pub mod local;
pub mod prompts;
pub mod remote;

pub use local::LocalComposer;
pub use remote::RemoteComposer;

/// Seed used when the user supplied neither input nor add-on.
pub const EMPTY_SEED: &str = "absolutely nothing";

/// One joke-writing backend.
#[async_trait]
pub trait JokeComposer: Send + Sync {
    /// Short backend name, for logs and transparency.
    fn backend(&self) -> &'static str;

    async fn compose(&self, template: &HumorTemplate, seed: &str) -> Result<String, JokeError>;
}

/// Strips leading and trailing whitespace.
pub fn echo_input(text: &str) -> String {
    text.trim().to_string()
}

/// Joins trimmed input and add-on into the seed. Never returns an empty string.
pub fn combine(user_input: &str, add_on: &str) -> String {
    let base = user_input.trim();
    let extra = add_on.trim();
    match (base.is_empty(), extra.is_empty()) {
        (false, false) => format!("{base} {extra}"),
        (false, true) => base.to_string(),
        (true, false) => extra.to_string(),
        (true, true) => EMPTY_SEED.to_string(),
    }
}

/// Looks up the template, builds the seed and hands both to the composer.
pub async fn generate(
    composer: &dyn JokeComposer,
    registry: &TemplateRegistry,
    template_key: &str,
    user_input: &str,
    add_on: &str,
) -> Result<String, JokeError> {
    let template = registry.get(template_key)?;
    let seed = combine(user_input, add_on);
    debug!(
        "Composing joke: backend={} template={} seed_len={}",
        composer.backend(),
        template.key,
        seed.len()
    );
    composer.compose(template, &seed).await
}

/// Builds the composer selected by configuration.
pub fn from_config(config: &Config) -> Arc<dyn JokeComposer> {
    match config.composer {
        ComposerKind::Remote => {
            let llm = LlmClient::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
                &config.openai_base_url,
            );
            info!("Joke composer: remote (model: {})", llm.model());
            Arc::new(RemoteComposer::new(llm))
        }
        ComposerKind::Local => {
            info!("Joke composer: local phrasebook");
            Arc::new(LocalComposer::new())
        }
    }
}
