//! `mistral-agent`: a small blocking client for Mistral chat completions.
//!
//! ```text
//! ClientConfig ──► MistralClient::new ──► chat(&ChatRequest) ──► ChatResponse
//!                                     └─► complete(prompt, json_object) ──► String
//! ```
//!
//! Failures are typed so callers can tell a missing or rejected key from a
//! network problem without string matching.

pub mod client;
pub mod error;
pub mod types;


pub use client::{ClientConfig, MistralClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::MistralError;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, Choice, MessageContent, ResponseFormat,
    ResponseFormatKind, Role, TokenUsage,
};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, MistralError>;
