//! Error types for the endpoint client and response decoding.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the generation endpoint.
///
/// Malformed NDJSON lines inside a live stream are deliberately not
/// represented here: they are expected chunk-boundary noise and are
/// dropped by the decoder.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to read the response stream or write to the output sink.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}")]
    Endpoint {
        /// HTTP status code of the failed response.
        status: u16,
    },

    /// The buffered response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}
