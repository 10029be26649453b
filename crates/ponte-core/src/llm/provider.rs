//! LlmProvider trait definition.
//!
//! This is the seam between the gateway and the concrete provider HTTP
//! client. Uses native async fn in traits (RPITIT, Rust 2024 edition).

use ponte_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
///
/// A provider may assemble its response from a streaming transport; the
/// contract here is only the fully assembled text plus the final token
/// counts. Implementations live in `ponte-infra`
/// (e.g. `AnthropicProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g. "anthropic").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
