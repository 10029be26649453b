//! Infrastructure implementations for Ponte.
//!
//! Concrete HTTP clients for the Anthropic Messages API and the Telegram
//! Bot API, plus the `config.toml` loader. Business logic lives in
//! `ponte-core`; this crate only does I/O.

pub mod config;
pub mod llm;
pub mod telegram;
