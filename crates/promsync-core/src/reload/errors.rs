use crate::discovery::DiscoveryError;
use crate::errors::PromsyncError;
use crate::files::FileError;
use crate::params::ParameterError;

/// Failure of a single load or reload operation.
///
/// None of these stop the reloader; they are logged and the next tick
/// tries again.
#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error("Parameter fetch failed: {source}")]
    ParameterFetchFailed {
        #[from]
        source: ParameterError,
    },

    #[error("Scrape config generation failed: {source}")]
    GenerationFailed {
        #[from]
        source: DiscoveryError,
    },

    #[error("Config file write failed: {source}")]
    WriteFailed {
        #[from]
        source: FileError,
    },
}

impl PromsyncError for ReloadError {
    fn error_code(&self) -> &'static str {
        match self {
            ReloadError::ParameterFetchFailed { source } => source.error_code(),
            ReloadError::GenerationFailed { source } => source.error_code(),
            ReloadError::WriteFailed { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ReloadError::ParameterFetchFailed { source } => source.is_user_error(),
            ReloadError::GenerationFailed { source } => source.is_user_error(),
            ReloadError::WriteFailed { source } => source.is_user_error(),
        }
    }
}
