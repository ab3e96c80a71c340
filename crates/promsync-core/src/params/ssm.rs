//! AWS Systems Manager Parameter Store backend.

use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use tracing::debug;

use super::errors::ParameterError;
use super::traits::ParameterStore;

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// Parameter store backed by SSM `GetParameter`.
///
/// Values are requested with decryption enabled so `SecureString`
/// parameters come back as plain text.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from a shared SDK configuration.
    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    fn name(&self) -> &'static str {
        "ssm"
    }

    async fn fetch(&self, name: &str) -> Result<String, ParameterError> {
        debug!(event = "core.params.fetch_started", backend = "ssm", parameter = name);

        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| classify_error(name, e.into_service_error()))?;

        let value = output
            .parameter()
            .and_then(|p| p.value())
            .ok_or_else(|| ParameterError::MissingValue {
                name: name.to_string(),
            })?;

        debug!(
            event = "core.params.fetch_completed",
            backend = "ssm",
            parameter = name,
            bytes = value.len()
        );

        Ok(value.to_string())
    }
}

/// Map an SSM service error onto the parameter error taxonomy.
fn classify_error(name: &str, err: GetParameterError) -> ParameterError {
    if err.is_parameter_not_found() {
        return ParameterError::NotFound {
            name: name.to_string(),
        };
    }

    let message = DisplayErrorContext(&err).to_string();
    if err.code() == Some(ACCESS_DENIED_CODE) {
        ParameterError::AccessDenied {
            name: name.to_string(),
            message,
        }
    } else {
        ParameterError::Request {
            name: name.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::error::ErrorMetadata;
    use aws_sdk_ssm::types::error::ParameterNotFound;

    #[test]
    fn test_classify_not_found() {
        let err = GetParameterError::ParameterNotFound(ParameterNotFound::builder().build());
        let classified = classify_error("missing", err);
        assert!(matches!(
            classified,
            ParameterError::NotFound { ref name } if name == "missing"
        ));
    }

    #[test]
    fn test_classify_access_denied() {
        let err = GetParameterError::generic(
            ErrorMetadata::builder()
                .code("AccessDeniedException")
                .message("not authorized to perform ssm:GetParameter")
                .build(),
        );
        let classified = classify_error("secret", err);
        match classified {
            ParameterError::AccessDenied { name, message } => {
                assert_eq!(name, "secret");
                assert!(message.contains("not authorized"));
            }
            other => panic!("expected AccessDenied, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_other_errors_as_request_failures() {
        let err = GetParameterError::generic(
            ErrorMetadata::builder()
                .code("ThrottlingException")
                .message("Rate exceeded")
                .build(),
        );
        let classified = classify_error("busy", err);
        assert!(matches!(
            classified,
            ParameterError::Request { ref name, .. } if name == "busy"
        ));
    }
}
