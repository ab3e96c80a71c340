//! Parameter store error types.

use crate::errors::PromsyncError;

/// Errors that can occur while fetching a parameter.
#[derive(Debug, thiserror::Error)]
pub enum ParameterError {
    #[error("Parameter '{name}' not found")]
    NotFound { name: String },

    #[error("Access denied reading parameter '{name}': {message}")]
    AccessDenied { name: String, message: String },

    #[error("Parameter '{name}' has no value")]
    MissingValue { name: String },

    #[error("Request for parameter '{name}' failed: {message}")]
    Request { name: String, message: String },
}

impl PromsyncError for ParameterError {
    fn error_code(&self) -> &'static str {
        match self {
            ParameterError::NotFound { .. } => "PARAMETER_NOT_FOUND",
            ParameterError::AccessDenied { .. } => "PARAMETER_ACCESS_DENIED",
            ParameterError::MissingValue { .. } => "PARAMETER_MISSING_VALUE",
            ParameterError::Request { .. } => "PARAMETER_REQUEST_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ParameterError::NotFound { .. } | ParameterError::AccessDenied { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ParameterError::NotFound {
            name: "ECS-Prometheus-Configuration".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Parameter 'ECS-Prometheus-Configuration' not found"
        );
        assert_eq!(error.error_code(), "PARAMETER_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_request_failure_is_not_user_error() {
        let error = ParameterError::Request {
            name: "ns".to_string(),
            message: "dispatch failure".to_string(),
        };
        assert_eq!(error.error_code(), "PARAMETER_REQUEST_FAILED");
        assert!(!error.is_user_error());
        assert!(error.to_string().contains("dispatch failure"));
    }
}
