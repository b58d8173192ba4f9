//! Wire types for the `/api/generate` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for one generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    /// Model name, passed through unvalidated.
    pub model: &'a str,
    /// The complete prompt text.
    pub prompt: &'a str,
    /// Whether the endpoint should stream NDJSON events.
    pub stream: bool,
}

/// One JSON object from the response, buffered or NDJSON-streamed.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateChunk {
    /// Token text carried by this object, if any.
    #[serde(default)]
    pub response: Option<String>,

    /// Set on the terminal object of a stream.
    #[serde(default)]
    pub done: Option<bool>,
}

/// A decoded streaming event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    /// Token text, absent when the underlying object carried none.
    pub token: Option<String>,

    /// Whether this is the terminal event of the response.
    pub is_final: bool,
}

impl From<GenerateChunk> for DecodedEvent {
    fn from(chunk: GenerateChunk) -> Self {
        Self {
            token: chunk.response,
            is_final: chunk.done.unwrap_or(false),
        }
    }
}
