/// LLM Client — the single point of entry for text-generation API calls.
///
/// Speaks the OpenAI Responses API. One request per call: no timeout, no
/// retry, no backoff. Failures go straight back to the caller.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Output budget for a single joke.
pub const MAX_OUTPUT_TOKENS: u32 = 180;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing OPENAI_API_KEY. Add it to the environment or a .env file.")]
    MissingApiKey,

    #[error("HTTP client is unavailable: {0}")]
    ClientUnavailable(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    input: Vec<InputMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: Vec<InputContent<'a>>,
}

#[derive(Debug, Serialize)]
struct InputContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    text: &'a str,
}

impl<'a> InputMessage<'a> {
    fn text(role: &'a str, text: &'a str) -> Self {
        Self {
            role,
            content: vec![InputContent {
                content_type: "input_text",
                text,
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Option<Vec<OutputItem>>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputItem {
    /// `null` on non-message items such as reasoning.
    #[serde(default)]
    pub content: Option<Vec<OutputContent>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputContent {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Plain text of the response.
    ///
    /// A non-blank top-level `output_text` wins. Otherwise every non-blank
    /// text fragment under `output[].content[]` is joined with newlines.
    pub fn text(&self) -> String {
        if let Some(direct) = self.output_text.as_deref() {
            if !direct.trim().is_empty() {
                return direct.trim().to_string();
            }
        }

        self.output
            .iter()
            .flatten()
            .flat_map(|item| item.content.iter().flatten())
            .filter_map(|content| content.text.as_deref())
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Thin wrapper around the Responses endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Result<Client, String>,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, model: String, base_url: &str) -> Self {
        let client = Client::builder().build().map_err(|e| {
            warn!("Failed to build HTTP client: {e}");
            e.to_string()
        });
        Self {
            client,
            api_key,
            model,
            endpoint: format!("{}/responses", base_url.trim_end_matches('/')),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system + user exchange and returns the extracted text.
    pub async fn respond(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| LlmError::ClientUnavailable(e.clone()))?;
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ResponsesRequest {
            model: &self.model,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            input: vec![
                InputMessage::text("system", system),
                InputMessage::text("user", prompt),
            ],
        };

        let response = client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;
        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        let text = llm_response.text();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}
