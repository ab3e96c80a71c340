//! Discovery error types.

use crate::errors::PromsyncError;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Failed to list namespaces: {message}")]
    NamespaceLookupFailed { message: String },

    #[error("Failed to list services in namespace '{namespace}': {message}")]
    ServiceLookupFailed { namespace: String, message: String },

    #[error("Failed to list instances of service '{service}' in namespace '{namespace}': {message}")]
    InstanceLookupFailed {
        namespace: String,
        service: String,
        message: String,
    },

    #[error("Invalid discovery request: {message}")]
    InvalidRequest { message: String },

    #[error("Failed to serialize scrape config: {source}")]
    SerializationFailed {
        #[from]
        source: serde_json::Error,
    },
}

impl PromsyncError for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            DiscoveryError::NamespaceLookupFailed { .. } => "DISCOVERY_NAMESPACE_LOOKUP_FAILED",
            DiscoveryError::ServiceLookupFailed { .. } => "DISCOVERY_SERVICE_LOOKUP_FAILED",
            DiscoveryError::InstanceLookupFailed { .. } => "DISCOVERY_INSTANCE_LOOKUP_FAILED",
            DiscoveryError::InvalidRequest { .. } => "DISCOVERY_INVALID_REQUEST",
            DiscoveryError::SerializationFailed { .. } => "DISCOVERY_SERIALIZATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_lookup_display() {
        let error = DiscoveryError::InstanceLookupFailed {
            namespace: "prod.local".to_string(),
            service: "web".to_string(),
            message: "throttled".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to list instances of service 'web' in namespace 'prod.local': throttled"
        );
        assert_eq!(error.error_code(), "DISCOVERY_INSTANCE_LOOKUP_FAILED");
        assert!(!error.is_user_error());
    }
}
