use thiserror::Error;

/// Errors raised while loading or validating `config.toml`.
///
/// All of these are fatal: the process refuses to start on any of them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("'{field}' must not be empty")]
    Empty { field: String },

    #[error("'{field}' still holds the placeholder value; set it before starting the bot")]
    Placeholder { field: String },

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Empty {
            field: "telegram.token".to_string(),
        };
        assert_eq!(err.to_string(), "'telegram.token' must not be empty");

        let err = ConfigError::Invalid {
            field: "provider.temperature".to_string(),
            reason: "must be between 0.0 and 1.0".to_string(),
        };
        assert!(err.to_string().contains("provider.temperature"));
        assert!(err.to_string().contains("0.0 and 1.0"));
    }
}
