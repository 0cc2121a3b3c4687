use std::time::Duration;

use crate::types::{ApiErrorBody, ChatRequest, ChatResponse};
use crate::{MistralError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_MODEL: &str = "mistral-large-latest";

/// Longest slice of an error body carried into error messages.
const ERROR_BODY_LIMIT: usize = 300;

// ─── ClientConfig ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

// ─── MistralClient ────────────────────────────────────────────────────────

/// Blocking chat-completions client. One request at a time, no retries.
#[derive(Debug, Clone)]
pub struct MistralClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl MistralClient {
    /// Fails with [`MistralError::MissingApiKey`] when no non-blank key is
    /// configured; no request is made in that case.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(MistralError::MissingApiKey)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    /// Send one chat request and decode the response.
    pub fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(%url, model = %request.model, "sending chat completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().map_err(classify)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "chat completion response");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MistralError::Unauthorized {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        if !status.is_success() {
            return Err(MistralError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| MistralError::Parse {
            body: truncate(&body),
            source,
        })
    }

    /// Single-turn prompt with this client's model. Returns the reply text,
    /// which may be empty.
    pub fn complete(&self, prompt: &str, json_object: bool) -> Result<String> {
        let mut request = ChatRequest::user(&self.model, prompt);
        if json_object {
            request = request.json_object();
        }
        self.chat(&request)?
            .first_text()
            .ok_or(MistralError::EmptyResponse)
    }
}

// ─── Internal ─────────────────────────────────────────────────────────────

fn classify(e: reqwest::Error) -> MistralError {
    if e.is_timeout() {
        MistralError::Timeout(e.to_string())
    } else if e.is_connect() || e.is_request() {
        MistralError::Network(e.to_string())
    } else {
        MistralError::Http(e)
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.summary())
        .unwrap_or_else(|| truncate(body))
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
