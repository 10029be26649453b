//! LLM provider abstraction.

pub mod provider;

pub use provider::LlmProvider;
