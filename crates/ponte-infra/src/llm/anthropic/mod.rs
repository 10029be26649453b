//! Anthropic Claude LLM provider implementation.
//!
//! Implements the [`LlmProvider`](ponte_core::llm::LlmProvider) trait
//! against the Anthropic Messages API. Responses are assembled from the
//! SSE stream before being handed back to the gateway.

pub mod client;
pub mod streaming;
pub mod types;

pub use client::AnthropicProvider;
