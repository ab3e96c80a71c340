//! Parameter store trait definition.

use super::errors::ParameterError;

/// Read-only access to a remote key-value parameter store.
///
/// The reloader only ever needs the current value of a parameter by name.
/// Authentication and region selection are the implementor's concern.
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    /// Short name of this backend for logging (e.g., "ssm").
    fn name(&self) -> &'static str;

    /// Fetch the current value of the named parameter.
    async fn fetch(&self, name: &str) -> Result<String, ParameterError>;
}
