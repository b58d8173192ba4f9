//! Streaming NDJSON event decoder.
//!
//! The response stream arrives in arbitrary chunks that need not align
//! with line or even UTF-8 character boundaries. The decoder buffers the
//! unterminated tail between `feed` calls and emits one event per complete
//! JSON line; malformed lines are dropped.

use crate::protocol::{DecodedEvent, GenerateChunk};

/// State machine over one response stream.
///
/// The pending buffer is owned by this decoder alone; one decoder serves
/// exactly one stream and is not reusable across streams.
#[derive(Debug, Default)]
pub struct StreamingEventDecoder {
    /// Unterminated tail of the last chunk.
    pending: Vec<u8>,
    /// Set once a terminal event has been produced.
    done: bool,
}

impl StreamingEventDecoder {
    /// Create a decoder for a fresh stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the terminal event has been produced.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed one chunk of raw bytes, yielding every event it completes.
    ///
    /// Events come out in the order their JSON objects appeared in the
    /// stream, independent of how the bytes were chunked. Once the
    /// terminal event is produced, remaining and future input is ignored.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<DecodedEvent> {
        if self.done {
            return Vec::new();
        }
        self.pending.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(newline) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=newline).collect();
            if let Some(event) = decode_line(&line[..newline]) {
                let is_final = event.is_final;
                events.push(event);
                if is_final {
                    self.done = true;
                    self.pending.clear();
                    break;
                }
            }
        }
        events
    }

    /// Drain the pending buffer at stream end.
    ///
    /// Covers streams whose final object is not newline-terminated. A
    /// stream that runs dry without ever producing a terminal event is not
    /// an error; the consumer is responsible for the trailing line break.
    pub fn finish(&mut self) -> Option<DecodedEvent> {
        if self.done || self.pending.is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.pending);
        let event = decode_line(&line);
        if let Some(ref e) = event {
            if e.is_final {
                self.done = true;
            }
        }
        event
    }
}

/// Parse one candidate line; empty and malformed lines produce no event.
fn decode_line(line: &[u8]) -> Option<DecodedEvent> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.is_empty() {
        return None;
    }
    match serde_json::from_slice::<GenerateChunk>(line) {
        Ok(chunk) => Some(chunk.into()),
        Err(e) => {
            log::debug!("dropping malformed stream line: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_survive_fixed_chunk_boundaries() {
        let mut decoder = StreamingEventDecoder::new();
        let mut events = Vec::new();
        events.extend(decoder.feed(br#"{"response":"Hel"#));
        events.extend(decoder.feed(b"lo\",\"done\":false}\n{\"respon"));
        events.extend(decoder.feed(b"se\":\" world\",\"done\":true}\n"));

        assert_eq!(
            events,
            vec![
                DecodedEvent {
                    token: Some("Hello".to_string()),
                    is_final: false
                },
                DecodedEvent {
                    token: Some(" world".to_string()),
                    is_final: true
                },
            ]
        );
        assert!(decoder.is_done());
    }

    #[test]
    fn test_events_survive_any_single_split() {
        // Multi-byte characters in the tokens make sure a split inside a
        // UTF-8 sequence also survives.
        let payload =
            "{\"response\":\"héllo\",\"done\":false}\n{\"response\":\" wörld\",\"done\":true}\n"
                .as_bytes();

        for split in 0..=payload.len() {
            let mut decoder = StreamingEventDecoder::new();
            let mut events = decoder.feed(&payload[..split]);
            events.extend(decoder.feed(&payload[split..]));

            assert_eq!(events.len(), 2, "split at byte {}", split);
            assert_eq!(events[0].token.as_deref(), Some("héllo"));
            assert_eq!(events[1].token.as_deref(), Some(" wörld"));
            assert!(events[1].is_final);
            assert!(decoder.is_done());
        }
    }

    #[test]
    fn test_malformed_line_is_dropped_not_fatal() {
        let mut decoder = StreamingEventDecoder::new();
        let events = decoder.feed(b"{not json at all\n{\"response\":\"ok\",\"done\":true}\n");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].token.as_deref(), Some("ok"));
        assert!(events[0].is_final);
        assert!(decoder.is_done());
    }

    #[test]
    fn test_empty_lines_produce_no_events() {
        let mut decoder = StreamingEventDecoder::new();
        let events = decoder.feed(b"\n\r\n{\"response\":\"a\"}\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].token.as_deref(), Some("a"));
        assert!(!events[0].is_final);
    }

    #[test]
    fn test_bytes_after_terminal_event_are_ignored() {
        let mut decoder = StreamingEventDecoder::new();
        let events =
            decoder.feed(b"{\"done\":true}\n{\"response\":\"late\",\"done\":false}\n");
        assert_eq!(events.len(), 1);
        assert!(events[0].is_final);

        assert!(decoder.feed(b"{\"response\":\"more\"}\n").is_empty());
    }

    #[test]
    fn test_finish_parses_unterminated_final_line() {
        let mut decoder = StreamingEventDecoder::new();
        assert!(decoder.feed(b"{\"response\":\"tail\",\"done\":true}").is_empty());
        assert!(!decoder.is_done());

        let event = decoder.finish().expect("pending line must decode");
        assert_eq!(event.token.as_deref(), Some("tail"));
        assert!(event.is_final);
        assert!(decoder.is_done());
    }

    #[test]
    fn test_finish_with_empty_buffer_is_none() {
        let mut decoder = StreamingEventDecoder::new();
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn test_finish_drops_malformed_tail() {
        let mut decoder = StreamingEventDecoder::new();
        decoder.feed(b"{\"response\":\"trunc");
        assert!(decoder.finish().is_none());
        assert!(!decoder.is_done());
    }
}
