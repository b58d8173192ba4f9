//! Client and streaming decoder for a local Ollama-compatible
//! text-generation endpoint.
//!
//! The endpoint speaks JSON over a single HTTP POST: one object for the
//! whole answer in buffered mode, newline-delimited objects carrying
//! incremental tokens in streaming mode.

pub mod aggregate;
pub mod client;
pub mod decoder;
pub mod error;
pub mod protocol;

pub use client::{ClientConfig, OllamaClient, DEFAULT_HOST};
pub use decoder::StreamingEventDecoder;
pub use error::{Error, Result};
pub use protocol::{DecodedEvent, GenerateChunk, GenerateRequest};
