//! Telegram Bot API transport.
//!
//! A hand-rolled HTTP client over `reqwest`, in the same shape as the LLM
//! provider clients: serde wire types plus a thin method-per-endpoint
//! client. Ponte only needs three calls: `getUpdates` long polling,
//! `sendMessage`, and `deleteMessage`.

pub mod client;
pub mod types;

pub use client::{TelegramClient, TelegramError};
