//! Configuration loader for Ponte.
//!
//! Reads `config.toml` and validates it into a [`BotConfig`]. Every
//! failure here is fatal: the relay refuses to start with a missing,
//! malformed, or placeholder configuration rather than limping along
//! with defaults.

use std::path::Path;

use ponte_types::config::BotConfig;
use ponte_types::error::ConfigError;

/// Placeholder values shipped in the example config. Starting the bot
/// with these still in place is always a mistake.
const PLACEHOLDER_API_KEY: &str = "your_claude_api_key_here";
const PLACEHOLDER_TELEGRAM_TOKEN: &str = "your_telegram_token_here";

/// Load and validate configuration from `path`.
pub async fn load_config(path: &Path) -> Result<BotConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let config: BotConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    validate(&config)?;
    Ok(config)
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validate a parsed configuration.
pub fn validate(config: &BotConfig) -> Result<(), ConfigError> {
    require_non_empty("provider.api_key", &config.provider.api_key)?;
    require_non_empty("provider.model", &config.provider.model)?;
    require_non_empty("telegram.token", &config.telegram.token)?;
    require_non_empty("bot.language", &config.bot.language)?;

    if config.provider.api_key == PLACEHOLDER_API_KEY {
        return Err(ConfigError::Placeholder {
            field: "provider.api_key".to_string(),
        });
    }
    if config.telegram.token == PLACEHOLDER_TELEGRAM_TOKEN {
        return Err(ConfigError::Placeholder {
            field: "telegram.token".to_string(),
        });
    }

    let temperature = config.provider.temperature;
    if !(0.0..=1.0).contains(&temperature) || temperature.is_nan() {
        return Err(ConfigError::Invalid {
            field: "provider.temperature".to_string(),
            reason: format!("must be between 0.0 and 1.0, got {temperature}"),
        });
    }

    if config.limits.max_tokens == 0 {
        return Err(ConfigError::Invalid {
            field: "limits.max_tokens".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    if !config.provider.max_requests_per_second.is_finite() {
        return Err(ConfigError::Invalid {
            field: "provider.max_requests_per_second".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if !config.limits.budget_usd.is_finite() {
        return Err(ConfigError::Invalid {
            field: "limits.budget_usd".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_toml() -> String {
        r#"
[provider]
api_key = "sk-ant-test"
model = "claude-sonnet-4-20250514"
max_requests_per_second = 1.0
temperature = 0.7

[telegram]
token = "123456:ABC-DEF"
authorized_users = [11111]

[limits]
max_tokens = 4096
budget_usd = 10.0

[bot]
language = "en"
"#
        .to_string()
    }

    async fn load_from_str(content: &str) -> Result<BotConfig, ConfigError> {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, content).await.unwrap();
        load_config(&path).await
    }

    #[tokio::test]
    async fn load_valid_config() {
        let config = load_from_str(&valid_toml()).await.unwrap();
        assert_eq!(config.provider.model, "claude-sonnet-4-20250514");
        assert_eq!(config.telegram.authorized_users, vec![11111]);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(&tmp.path().join("nope.toml")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn malformed_toml_is_a_parse_error() {
        let err = load_from_str("this is not { valid toml !!!").await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn placeholder_api_key_is_rejected() {
        let content = valid_toml().replace("sk-ant-test", "your_claude_api_key_here");
        let err = load_from_str(&content).await.unwrap_err();
        assert!(matches!(err, ConfigError::Placeholder { .. }));
        assert!(err.to_string().contains("provider.api_key"));
    }

    #[tokio::test]
    async fn placeholder_telegram_token_is_rejected() {
        let content = valid_toml().replace("123456:ABC-DEF", "your_telegram_token_here");
        let err = load_from_str(&content).await.unwrap_err();
        assert!(matches!(err, ConfigError::Placeholder { .. }));
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let content = valid_toml().replace("123456:ABC-DEF", "  ");
        let err = load_from_str(&content).await.unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[tokio::test]
    async fn out_of_range_temperature_is_rejected() {
        let content = valid_toml().replace("temperature = 0.7", "temperature = 1.5");
        let err = load_from_str(&content).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("temperature"));
    }

    #[tokio::test]
    async fn zero_max_tokens_is_rejected() {
        let content = valid_toml().replace("max_tokens = 4096", "max_tokens = 0");
        let err = load_from_str(&content).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
