//! SSE assembly for Anthropic Messages API responses.
//!
//! Walks the event sequence described in the Anthropic docs:
//! 1. `message_start` -- message object with initial usage (input tokens)
//! 2. Per block: `content_block_start` -> N x `content_block_delta` -> `content_block_stop`
//! 3. `message_delta` -- stop_reason and cumulative output tokens
//! 4. `message_stop` -- final event
//! 5. `ping` events may appear anywhere (keepalive)
//! 6. `error` events may appear mid-stream
//!
//! The gateway only needs the fully assembled text and the final token
//! counts, so text deltas are concatenated here rather than surfaced
//! incrementally.

use std::fmt;

use eventsource_stream::Eventsource;
use futures_util::{Stream, StreamExt};

use ponte_types::llm::{LlmError, Usage};

use super::types::{
    AnthropicDelta, ContentBlockDeltaPayload, ErrorPayload, MessageDeltaPayload,
    MessageStartPayload,
};

/// Final assembled message from one SSE stream.
#[derive(Debug, Clone)]
pub struct StreamedMessage {
    pub id: String,
    pub model: String,
    pub content: String,
    pub usage: Usage,
}

fn decode<T: serde::de::DeserializeOwned>(event: &str, data: &str) -> Result<T, LlmError> {
    serde_json::from_str(data)
        .map_err(|e| LlmError::Deserialization(format!("bad '{event}' payload: {e}")))
}

/// Consume an SSE byte stream and assemble the complete message.
///
/// Generic over the byte stream so tests can feed canned event text; the
/// client passes `response.bytes_stream()`.
pub async fn collect_sse_message<S, B, E>(byte_stream: S) -> Result<StreamedMessage, LlmError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    let mut events = std::pin::pin!(byte_stream.eventsource());

    let mut id = String::new();
    let mut model = String::new();
    let mut content = String::new();
    let mut input_tokens: u32 = 0;
    let mut output_tokens: u32 = 0;
    let mut completed = false;

    while let Some(event) = events.next().await {
        let event = event.map_err(|e| LlmError::Stream(e.to_string()))?;

        match event.event.as_str() {
            "message_start" => {
                let payload: MessageStartPayload = decode("message_start", &event.data)?;
                id = payload.message.id;
                model = payload.message.model;
                if let Some(usage) = payload.message.usage {
                    input_tokens = usage.input_tokens;
                    output_tokens = usage.output_tokens;
                }
            }
            "content_block_delta" => {
                let payload: ContentBlockDeltaPayload = decode("content_block_delta", &event.data)?;
                if let AnthropicDelta::TextDelta { text } = payload.delta {
                    content.push_str(&text);
                }
            }
            "message_delta" => {
                let payload: MessageDeltaPayload = decode("message_delta", &event.data)?;
                // Usage here is cumulative; it supersedes the initial count.
                output_tokens = payload.usage.output_tokens;
                if payload.usage.input_tokens > 0 {
                    input_tokens = payload.usage.input_tokens;
                }
            }
            "message_stop" => {
                completed = true;
                break;
            }
            "error" => {
                let payload: ErrorPayload = decode("error", &event.data)?;
                return Err(LlmError::Provider {
                    message: format!("{}: {}", payload.error.error_type, payload.error.message),
                });
            }
            // Keepalives and block boundaries carry nothing we need.
            "ping" | "content_block_start" | "content_block_stop" => {}
            other => {
                tracing::debug!(event = other, "ignoring unrecognized SSE event");
            }
        }
    }

    if !completed {
        return Err(LlmError::Stream(
            "stream ended before message_stop".to_string(),
        ));
    }

    Ok(StreamedMessage {
        id,
        model,
        content,
        usage: Usage {
            input_tokens,
            output_tokens,
        },
    })
}
