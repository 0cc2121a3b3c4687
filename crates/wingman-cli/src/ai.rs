//! Glue between the Mistral client and the core completion seam, plus the
//! operator-facing wording for every failure kind.

use crate::console::Console;
use mistral_agent::{ClientConfig, MistralClient, MistralError};
use std::time::Duration;
use wingman_core::config::{AiConfig, Env};
use wingman_core::generate::{Completion, CompletionError, CompletionRequest};

pub const CREDENTIAL_EXAMPLE: &str = "Example: export MISTRAL_API_KEY=your_key_here";

/// A Mistral-backed [`Completion`]. Construction never fails: a missing key
/// or a client that could not be built is reported on the first request.
pub struct MistralCompletion {
    client: Result<MistralClient, CompletionError>,
}

impl MistralCompletion {
    pub fn new(ai: &AiConfig, env: &Env) -> Self {
        let config = ClientConfig {
            api_key: env.api_key.clone(),
            base_url: ai.base_url.clone(),
            model: ai.model.clone(),
            timeout: Duration::from_secs(ai.timeout_secs.max(1)),
        };
        let client = MistralClient::new(config).map_err(classify);
        if let Err(e) = &client {
            tracing::debug!("Mistral client unavailable: {e}");
        }
        Self { client }
    }
}

impl Completion for MistralCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let client = self.client.as_ref().map_err(Clone::clone)?;
        client
            .complete(&request.prompt, request.json_object)
            .map_err(classify)
    }
}

/// The generator for this session, or `None` when AI is switched off.
pub fn build(ai: &AiConfig, env: &Env) -> Option<Box<dyn Completion>> {
    if !ai.enabled {
        tracing::debug!("AI generation disabled by config");
        return None;
    }
    Some(Box::new(MistralCompletion::new(ai, env)))
}

pub fn classify(e: MistralError) -> CompletionError {
    match e {
        MistralError::MissingApiKey => CompletionError::MissingCredential,
        MistralError::Unauthorized { message, .. } => CompletionError::Unauthorized(message),
        MistralError::Timeout(detail) | MistralError::Network(detail) => {
            CompletionError::Network(detail)
        }
        other => CompletionError::Other(other.to_string()),
    }
}

pub fn operator_message(e: &CompletionError) -> String {
    match e {
        CompletionError::Unavailable => {
            "Mistral AI is not available. Enable it under ai.enabled in .wingman/config.yaml."
                .to_string()
        }
        CompletionError::MissingCredential => {
            "Mistral API key not found. Set MISTRAL_API_KEY environment variable.".to_string()
        }
        CompletionError::Unauthorized(_) => {
            "Mistral API key invalid or expired. Set a valid MISTRAL_API_KEY in your environment."
                .to_string()
        }
        CompletionError::Network(_) => {
            "Network error connecting to Mistral AI. Check your internet connection and try again."
                .to_string()
        }
        CompletionError::Other(detail) => format!("Error calling Mistral AI: {detail}"),
    }
}

/// Print the operator message for `e`, with a setup hint for key problems.
pub fn report_failure(console: &mut dyn Console, e: &CompletionError) {
    tracing::debug!("completion failed: {e:?}");
    console.print(&format!("\n{}", operator_message(e)));
    if e.is_credential() {
        console.print(CREDENTIAL_EXAMPLE);
    }
}
