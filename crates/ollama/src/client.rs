//! Blocking HTTP client for a local Ollama-compatible endpoint.

use std::io::Write;

use crate::aggregate;
use crate::error::{Error, Result};
use crate::protocol::GenerateRequest;

/// Default base URL of a stock local Ollama install.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Connection settings, resolved once by the caller and passed in.
///
/// The endpoint URL is never read from the process environment here; the
/// front end decides where it comes from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the endpoint, without the API path.
    pub base_url: String,
    /// Model name forwarded with every request.
    pub model: String,
}

/// Client for the `/api/generate` endpoint.
pub struct OllamaClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl OllamaClient {
    /// Create a client from resolved connection settings.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }

    /// Submit a prompt and return the complete answer in one piece.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        log::debug!("POST {} (buffered)", self.endpoint());
        let response = self.http.post(self.endpoint()).json(&request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Endpoint {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        aggregate::buffered_answer(&body)
    }

    /// Submit a prompt and stream answer tokens into `sink` as they arrive.
    pub fn generate_streaming<W: Write>(&self, prompt: &str, sink: W) -> Result<()> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: true,
        };

        log::debug!("POST {} (streaming)", self.endpoint());
        let response = self.http.post(self.endpoint()).json(&request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Endpoint {
                status: status.as_u16(),
            });
        }

        aggregate::relay_stream(response, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = OllamaClient::new(ClientConfig {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
        });
        assert_eq!(client.endpoint(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = OllamaClient::new(ClientConfig {
            base_url: "http://10.0.0.5:11434/".to_string(),
            model: "llama3.2".to_string(),
        });
        assert_eq!(client.endpoint(), "http://10.0.0.5:11434/api/generate");
    }
}
