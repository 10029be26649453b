//! AnthropicProvider -- concrete [`LlmProvider`] implementation for
//! Anthropic Claude.
//!
//! Sends requests to the Anthropic Messages API (`/v1/messages`) with
//! proper authentication headers. Requests always use streaming mode; the
//! response text and final token counts are assembled before returning,
//! which is all the gateway contract requires.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use ponte_core::llm::LlmProvider;
use ponte_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::streaming::collect_sse_message;
use super::types::{AnthropicMessage, AnthropicRequest};

/// Anthropic Claude LLM provider.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl AnthropicProvider {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into the wire format.
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| AnthropicMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens,
            messages,
            stream: true,
            temperature: request.temperature,
        }
    }
}

// AnthropicProvider intentionally does NOT derive Debug: the SecretString
// field already refuses to print the key, but omitting Debug entirely keeps
// the whole client out of log output.

impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_anthropic_request(request);
        let url = self.url("/v1/messages");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                529 => LlmError::Overloaded(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let message = collect_sse_message(response.bytes_stream()).await?;

        Ok(CompletionResponse {
            id: message.id,
            content: message.content,
            model: message.model,
            usage: message.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponte_types::llm::Message;

    fn make_provider() -> AnthropicProvider {
        AnthropicProvider::new(SecretString::from("test-key-not-real"))
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_provider().name(), "anthropic");
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url("/v1/messages"),
            "http://localhost:8080/v1/messages"
        );
    }

    #[test]
    fn test_to_anthropic_request_always_streams() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            messages: vec![Message::user("hi"), Message::assistant("hello")],
            max_tokens: 1024,
            temperature: Some(0.7),
        };

        let wire = provider.to_anthropic_request(&request);
        assert!(wire.stream);
        assert_eq!(wire.model, "claude-sonnet-4-20250514");
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "user");
        assert_eq!(wire.messages[1].role, "assistant");
        assert_eq!(wire.max_tokens, 1024);
    }
}
