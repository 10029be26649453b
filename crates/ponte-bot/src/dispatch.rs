//! Dispatch loop mapping Telegram updates to gateway operations.
//!
//! One update at a time: the loop long-polls `getUpdates`, gates every
//! message on the allow-list, dispatches recognized commands, and sends
//! free text through the completion gateway. Runtime errors are contained
//! within the turn they occur in; only startup configuration problems can
//! stop the process.

use std::time::Duration;

use ponte_core::auth::AllowList;
use ponte_core::gateway::{ChatGateway, GatewayError};
use ponte_core::i18n::Texts;
use ponte_core::llm::LlmProvider;
use ponte_infra::telegram::TelegramClient;
use ponte_infra::telegram::types::ChatMessage;

/// Delay before retrying after a failed `getUpdates` call.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// A recognized inbound command, or free text for the gateway.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Start,
    Help,
    Reset,
    Stats,
    Chat(&'a str),
}

/// Parse a message into a command.
///
/// Commands may carry a bot-name suffix (`/stats@ponte_bot`); unknown
/// commands fall through to the chat handler, same as plain text.
fn parse_command(text: &str) -> Command<'_> {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix('/') {
        let token = rest.split_whitespace().next().unwrap_or("");
        let name = token.split('@').next().unwrap_or("");
        match name {
            "start" => return Command::Start,
            "help" => return Command::Help,
            "reset" => return Command::Reset,
            "stats" => return Command::Stats,
            _ => {}
        }
    }
    Command::Chat(trimmed)
}

/// Drives the bot: Telegram in, gateway out.
pub struct Dispatcher<P> {
    telegram: TelegramClient,
    gateway: ChatGateway<P>,
    texts: &'static Texts,
    allow_list: AllowList,
    offset: i64,
}

impl<P: LlmProvider> Dispatcher<P> {
    pub fn new(
        telegram: TelegramClient,
        gateway: ChatGateway<P>,
        texts: &'static Texts,
        allow_list: AllowList,
    ) -> Self {
        Self {
            telegram,
            gateway,
            texts,
            allow_list,
            offset: 0,
        }
    }

    /// Run the long-poll loop. Never returns under normal operation.
    pub async fn run(&mut self) {
        tracing::info!("starting Telegram long-poll loop");
        loop {
            match self.telegram.get_updates(self.offset).await {
                Ok(updates) => {
                    for update in updates {
                        self.offset = self.offset.max(update.update_id + 1);
                        if let Some(message) = update.message {
                            self.handle_message(message).await;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "getUpdates failed, retrying");
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                }
            }
        }
    }

    async fn handle_message(&mut self, message: ChatMessage) {
        let Some(user) = message.from.as_ref() else {
            return;
        };
        let user_id = user.id;
        let chat_id = message.chat.id;
        let message_id = message.message_id;
        let Some(text) = message.text else {
            return;
        };

        if !self.allow_list.permits(user_id) {
            tracing::info!(user_id, "rejected unauthorized user");
            self.reply(chat_id, self.texts.unauthorized, Some(message_id))
                .await;
            return;
        }

        match parse_command(&text) {
            Command::Start => {
                self.reply(chat_id, self.texts.welcome, Some(message_id))
                    .await;
            }
            Command::Help => {
                self.reply(chat_id, self.texts.help, Some(message_id)).await;
            }
            Command::Reset => {
                self.gateway.reset_conversation();
                self.reply(chat_id, self.texts.reset, Some(message_id)).await;
            }
            Command::Stats => {
                let rendered = self.texts.token_usage(&self.gateway.usage());
                self.reply(chat_id, &rendered, Some(message_id)).await;
            }
            Command::Chat(prompt) => {
                self.handle_chat(chat_id, message_id, prompt).await;
            }
        }
    }

    /// One free-text turn: thinking indicator, gateway call, final reply.
    async fn handle_chat(&mut self, chat_id: i64, message_id: i64, prompt: &str) {
        let thinking = self
            .telegram
            .send_message(chat_id, self.texts.thinking, Some(message_id))
            .await
            .ok();

        let reply_text = match self.gateway.converse(prompt).await {
            Ok(exchange) => exchange.text,
            Err(GatewayError::BudgetExceeded { spent, ceiling }) => {
                self.texts.budget_exhausted(spent, ceiling)
            }
            Err(GatewayError::Provider(e)) => self.texts.api_error(&e.to_string()),
        };

        if let Some(thinking) = thinking {
            if let Err(e) = self
                .telegram
                .delete_message(chat_id, thinking.message_id)
                .await
            {
                tracing::debug!(error = %e, "failed to delete thinking indicator");
            }
        }

        self.reply(chat_id, &reply_text, Some(message_id)).await;
    }

    async fn reply(&self, chat_id: i64, text: &str, reply_to: Option<i64>) {
        if let Err(e) = self.telegram.send_message(chat_id, text, reply_to).await {
            tracing::warn!(error = %e, chat_id, "failed to send message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_commands() {
        assert_eq!(parse_command("/start"), Command::Start);
        assert_eq!(parse_command("/help"), Command::Help);
        assert_eq!(parse_command("/reset"), Command::Reset);
        assert_eq!(parse_command("/stats"), Command::Stats);
    }

    #[test]
    fn parse_command_with_bot_suffix() {
        assert_eq!(parse_command("/stats@ponte_bot"), Command::Stats);
        assert_eq!(parse_command("/reset@ponte_bot extra"), Command::Reset);
    }

    #[test]
    fn parse_free_text_is_chat() {
        assert_eq!(parse_command("hello there"), Command::Chat("hello there"));
        assert_eq!(parse_command("  padded  "), Command::Chat("padded"));
    }

    #[test]
    fn parse_unknown_command_falls_through_to_chat() {
        assert_eq!(parse_command("/frobnicate"), Command::Chat("/frobnicate"));
    }
}
