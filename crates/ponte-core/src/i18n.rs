//! Localized user-facing text.
//!
//! All strings the bot ever sends to a chat live here, one static table
//! per supported locale. The table is resolved once at startup; an
//! unknown locale falls back to English with a warning.

use crate::gateway::ledger::UsageSnapshot;

/// Static text table for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Texts {
    pub welcome: &'static str,
    pub help: &'static str,
    pub reset: &'static str,
    pub unauthorized: &'static str,
    pub thinking: &'static str,
    token_usage: &'static str,
    api_error: &'static str,
    budget_exhausted: &'static str,
}

const EN: Texts = Texts {
    welcome: "Welcome to Claude AI Chat Bot!\n\nYou can send messages directly to chat with Claude AI.\n\nAvailable commands:\n/start - Start conversation\n/help - Show help message\n/reset - Reset conversation\n/stats - Show token usage and cost",
    help: "You can send messages directly to chat with Claude AI.\n\nAvailable commands:\n/start - Start conversation\n/help - Show help message\n/reset - Reset conversation\n/stats - Show token usage and cost",
    reset: "Conversation has been reset.",
    unauthorized: "Sorry, you are not authorized to use this bot.",
    thinking: "Thinking...",
    token_usage: "Token usage:\nInput: {input_tokens}\nOutput: {output_tokens}\nTotal: {total_tokens}\nEstimated cost: ${total_cost}",
    api_error: "Sorry, an error occurred while communicating with the Claude API: {error}",
    budget_exhausted: "Budget ceiling reached (${spent} of ${ceiling} used). The request was not sent.",
};

const ZH_TW: Texts = Texts {
    welcome: "歡迎使用 Claude AI 聊天機器人！\n\n您可以直接發送消息與 Claude AI 對話。\n\n可用命令：\n/start - 開始對話\n/help - 顯示幫助訊息\n/reset - 重置對話\n/stats - 顯示已使用的 Token 數量和成本",
    help: "您可以直接發送消息與 Claude AI 對話。\n\n可用命令：\n/start - 開始對話\n/help - 顯示幫助訊息\n/reset - 重置對話\n/stats - 顯示已使用的 Token 數量和成本",
    reset: "對話已重置。",
    unauthorized: "抱歉，您未被授權使用此機器人。",
    thinking: "思考中...",
    token_usage: "已使用的 Token：\n輸入：{input_tokens}\n輸出：{output_tokens}\n總計：{total_tokens}\n估計成本：${total_cost}",
    api_error: "抱歉，與 Claude API 通信時發生錯誤: {error}",
    budget_exhausted: "已達預算上限（已使用 ${spent} / ${ceiling}），請求未送出。",
};

impl Texts {
    /// Resolve the text table for a language code.
    ///
    /// Recognized codes are `en` and `zh-tw`. Anything else falls back to
    /// English with a warning; call this once at startup.
    pub fn resolve(language: &str) -> &'static Texts {
        match language {
            "en" => &EN,
            "zh-tw" => &ZH_TW,
            other => {
                tracing::warn!(language = other, "unknown language, falling back to 'en'");
                &EN
            }
        }
    }

    /// Render the cumulative usage report. Cost shows 4 decimal places.
    pub fn token_usage(&self, snapshot: &UsageSnapshot) -> String {
        self.token_usage
            .replace("{input_tokens}", &snapshot.input_tokens.to_string())
            .replace("{output_tokens}", &snapshot.output_tokens.to_string())
            .replace("{total_tokens}", &snapshot.total_tokens.to_string())
            .replace("{total_cost}", &format!("{:.4}", snapshot.total_cost))
    }

    /// Render the provider-failure message with the error detail.
    pub fn api_error(&self, detail: &str) -> String {
        self.api_error.replace("{error}", detail)
    }

    /// Render the budget-refusal message.
    pub fn budget_exhausted(&self, spent: f64, ceiling: f64) -> String {
        self.budget_exhausted
            .replace("{spent}", &format!("{spent:.4}"))
            .replace("{ceiling}", &format!("{ceiling:.2}"))
    }
}
