//! Response aggregation for buffered and streamed generation.
//!
//! Buffered mode expects the whole answer as one JSON object; streaming
//! mode relays tokens to the output sink in arrival order, with no
//! buffering or reordering.

use std::io::{Read, Write};

use crate::decoder::StreamingEventDecoder;
use crate::error::{Error, Result};
use crate::protocol::GenerateChunk;

/// Read size for draining a live response stream.
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Extract the single answer from a buffered (non-streamed) response body.
pub fn buffered_answer(body: &str) -> Result<String> {
    let chunk: GenerateChunk =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    let answer = chunk
        .response
        .ok_or_else(|| Error::MalformedResponse("missing response field".to_string()))?;

    Ok(answer.trim().to_string())
}

/// Relay tokens from a live response stream to `sink` as they arrive.
///
/// Every non-empty token is written and flushed immediately, in arrival
/// order. One trailing newline is written whether the stream ends with a
/// terminal event or runs dry without one, so the output is always
/// line-terminated.
pub fn relay_stream<R: Read, W: Write>(mut stream: R, mut sink: W) -> Result<()> {
    let mut decoder = StreamingEventDecoder::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        for event in decoder.feed(&chunk[..n]) {
            write_token(&mut sink, event.token.as_deref())?;
        }
        if decoder.is_done() {
            break;
        }
    }

    if !decoder.is_done() {
        if let Some(event) = decoder.finish() {
            write_token(&mut sink, event.token.as_deref())?;
        }
    }

    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

fn write_token<W: Write>(sink: &mut W, token: Option<&str>) -> Result<()> {
    if let Some(token) = token {
        if !token.is_empty() {
            sink.write_all(token.as_bytes())?;
            sink.flush()?;
        }
    }
    Ok(())
}
