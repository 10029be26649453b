//! LLM provider implementations.
//!
//! Contains the concrete implementation of the
//! [`LlmProvider`](ponte_core::llm::LlmProvider) trait for Anthropic Claude.

pub mod anthropic;

pub use anthropic::AnthropicProvider;
