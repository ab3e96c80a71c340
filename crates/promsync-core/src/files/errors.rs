use crate::errors::PromsyncError;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PromsyncError for FileError {
    fn error_code(&self) -> &'static str {
        match self {
            FileError::WriteFailed { .. } => "FILE_WRITE_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failed_display() {
        let error = FileError::WriteFailed {
            path: "/etc/config/prometheus.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write '/etc/config/prometheus.yaml': denied"
        );
        assert_eq!(error.error_code(), "FILE_WRITE_FAILED");
    }
}
