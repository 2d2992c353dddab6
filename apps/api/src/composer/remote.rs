use async_trait::async_trait;

use crate::composer::prompts::{build_user_prompt, JOKE_SYSTEM};
use crate::composer::JokeComposer;
use crate::errors::JokeError;
use crate::llm_client::{LlmClient, LlmError};
use crate::templates::HumorTemplate;

/// Writes jokes through the text-generation API, using the template's
/// examples as few-shot context.
pub struct RemoteComposer {
    llm: LlmClient,
}

impl RemoteComposer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

impl From<LlmError> for JokeError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => JokeError::Configuration(err.to_string()),
            LlmError::ClientUnavailable(_) => JokeError::Dependency(err.to_string()),
            LlmError::EmptyContent => JokeError::EmptyResponse,
            LlmError::Http(_) | LlmError::Api { .. } => JokeError::RemoteCall(err.to_string()),
        }
    }
}

#[async_trait]
impl JokeComposer for RemoteComposer {
    fn backend(&self) -> &'static str {
        "remote"
    }

    async fn compose(&self, template: &HumorTemplate, seed: &str) -> Result<String, JokeError> {
        let prompt = build_user_prompt(template, seed);
        Ok(self.llm.respond(JOKE_SYSTEM, &prompt).await?)
    }
}
