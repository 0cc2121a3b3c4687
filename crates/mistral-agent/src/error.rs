use thiserror::Error;

#[derive(Debug, Error)]
pub enum MistralError {
    #[error("Mistral API key not found")]
    MissingApiKey,

    #[error("Mistral API rejected the key (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Request to Mistral timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Mistral API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Mistral response: {source}\n  body: {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Mistral response contained no choices")]
    EmptyResponse,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
