//! Configuration types for Ponte.
//!
//! `BotConfig` represents the `config.toml` that a deployment must provide.
//! Unlike most settings files there are few defaults here: the relay cannot
//! run without an API key, a bot token, and explicit spending limits, so
//! the loader in `ponte-infra` treats missing or placeholder values as
//! fatal startup errors.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Ponte relay bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub provider: ProviderConfig,
    pub telegram: TelegramConfig,
    pub limits: LimitsConfig,
    pub bot: BotSection,

    /// Optional exact-match pricing overrides, checked before the built-in
    /// pricing table.
    #[serde(default)]
    pub pricing: Vec<PricingOverride>,
}

/// Anthropic provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Anthropic API key. Wrapped in `secrecy::SecretString` at client
    /// construction; kept plain here so the loader can validate it.
    pub api_key: String,
    /// Model identifier (e.g. "claude-sonnet-4-20250514").
    pub model: String,
    /// Maximum outbound requests per second. `<= 0` disables rate limiting.
    pub max_requests_per_second: f64,
    /// Sampling temperature, 0.0 to 1.0.
    pub temperature: f64,
}

/// Telegram transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather.
    pub token: String,
    /// User IDs allowed to talk to the bot. Empty means unrestricted.
    #[serde(default)]
    pub authorized_users: Vec<i64>,
}

/// Spending and context limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum output tokens per completion.
    pub max_tokens: u32,
    /// Budget ceiling in USD. `<= 0` means unlimited.
    pub budget_usd: f64,
    /// Maximum retained user+assistant exchanges. `0` keeps the full
    /// history, which grows without bound over a long conversation.
    #[serde(default)]
    pub max_history_exchanges: usize,
}

/// Bot presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSection {
    /// Display language for all user-facing strings (`en` or `zh-tw`).
    pub language: String,
}

/// Exact-match pricing override for one model, USD per 1K tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingOverride {
    pub model: String,
    pub input_per_kilotoken: f64,
    pub output_per_kilotoken: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize_full() {
        let toml_str = r#"
[provider]
api_key = "sk-ant-xxxx"
model = "claude-sonnet-4-20250514"
max_requests_per_second = 1.0
temperature = 0.7

[telegram]
token = "123456:ABC-DEF"
authorized_users = [11111, 22222]

[limits]
max_tokens = 4096
budget_usd = 10.0
max_history_exchanges = 50

[bot]
language = "zh-tw"

[[pricing]]
model = "claude-sonnet-4-20250514"
input_per_kilotoken = 0.003
output_per_kilotoken = 0.015
"#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, "claude-sonnet-4-20250514");
        assert_eq!(config.telegram.authorized_users, vec![11111, 22222]);
        assert_eq!(config.limits.max_tokens, 4096);
        assert_eq!(config.limits.max_history_exchanges, 50);
        assert_eq!(config.bot.language, "zh-tw");
        assert_eq!(config.pricing.len(), 1);
        assert!((config.pricing[0].input_per_kilotoken - 0.003).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_optional_fields_default() {
        let toml_str = r#"
[provider]
api_key = "sk-ant-xxxx"
model = "claude-sonnet-4-20250514"
max_requests_per_second = 0.5
temperature = 0.5

[telegram]
token = "123456:ABC-DEF"

[limits]
max_tokens = 1024
budget_usd = 1.0

[bot]
language = "en"
"#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert!(config.telegram.authorized_users.is_empty());
        assert_eq!(config.limits.max_history_exchanges, 0);
        assert!(config.pricing.is_empty());
    }

    #[test]
    fn test_config_missing_required_section_fails() {
        let toml_str = r#"
[provider]
api_key = "sk-ant-xxxx"
model = "claude-sonnet-4-20250514"
max_requests_per_second = 0.5
temperature = 0.5
"#;
        assert!(toml::from_str::<BotConfig>(toml_str).is_err());
    }
}
