//! Telegram Bot API HTTP client.
//!
//! The bot token is part of every URL, so it is held in
//! [`secrecy::SecretString`] and exposed only while building a request.
//! Errors here are never fatal: the dispatch loop logs them and keeps
//! polling.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ApiResponse, ChatMessage, Update};

/// Long-poll timeout passed to `getUpdates`, in seconds.
pub const POLL_TIMEOUT_SECS: u64 = 50;

/// Errors from Telegram Bot API operations.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Telegram Bot API client.
pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

#[derive(Serialize)]
struct GetUpdatesBody {
    offset: i64,
    timeout: u64,
    allowed_updates: &'static [&'static str],
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

#[derive(Serialize)]
struct DeleteMessageBody {
    chat_id: i64,
    message_id: i64,
}

impl TelegramClient {
    pub fn new(token: SecretString) -> Self {
        // Client timeout must comfortably exceed the long-poll window.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: "https://api.telegram.org".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a Bot API method.
    fn url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url,
            self.token.expose_secret(),
            method
        )
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &impl Serialize,
    ) -> Result<T, TelegramError> {
        let response = self
            .client
            .post(self.url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.to_string()))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Deserialization(e.to_string()))?;

        if !envelope.ok {
            return Err(TelegramError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::Deserialization("missing result field".to_string()))
    }

    /// Long-poll for updates after `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &GetUpdatesBody {
                offset,
                timeout: POLL_TIMEOUT_SECS,
                allowed_updates: &["message"],
            },
        )
        .await
    }

    /// Send a text message, optionally as a reply.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<ChatMessage, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessageBody {
                chat_id,
                text,
                reply_to_message_id,
            },
        )
        .await
    }

    /// Delete a message (used to clear the "thinking" indicator).
    pub async fn delete_message(
        &self,
        chat_id: i64,
        message_id: i64,
    ) -> Result<bool, TelegramError> {
        self.call(
            "deleteMessage",
            &DeleteMessageBody {
                chat_id,
                message_id,
            },
        )
        .await
    }
}
