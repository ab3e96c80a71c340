use std::error::Error;

/// Base trait for all application errors
pub trait PromsyncError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the error stems from operator-supplied input (environment,
    /// parameter contents) rather than from infrastructure
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {message}")]
    InvalidValue {
        var: &'static str,
        value: String,
        message: String,
    },
}

impl PromsyncError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidValue {
            var: "CONFIG_RELOAD_FREQUENCY",
            value: "soon".to_string(),
            message: "expected a positive number of seconds".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 'soon' for CONFIG_RELOAD_FREQUENCY: expected a positive number of seconds"
        );
        assert_eq!(error.error_code(), "CONFIG_INVALID_VALUE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_boxed_error_keeps_code() {
        let boxed: Box<dyn PromsyncError> = Box::new(ConfigError::InvalidValue {
            var: "PROMETHEUS_RELOAD_CONFIG",
            value: "maybe".to_string(),
            message: "expected a boolean".to_string(),
        });
        assert_eq!(boxed.error_code(), "CONFIG_INVALID_VALUE");
    }
}
