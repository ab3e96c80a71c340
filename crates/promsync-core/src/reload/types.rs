use super::errors::ReloadError;

/// Outcome of one startup load or one tick.
#[derive(Debug)]
pub struct ReloadReport {
    /// `None` when the main config was not due on this tick.
    pub main_config: Option<Result<(), ReloadError>>,
    pub scrape_config: Result<(), ReloadError>,
}

impl ReloadReport {
    pub fn main_config_attempted(&self) -> bool {
        self.main_config.is_some()
    }

    /// True when every attempted operation succeeded.
    pub fn is_success(&self) -> bool {
        self.scrape_config.is_ok() && self.main_config.as_ref().is_none_or(|r| r.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterError;

    fn fetch_error() -> ReloadError {
        ParameterError::MissingValue {
            name: "p".to_string(),
        }
        .into()
    }

    #[test]
    fn test_report_success_without_main_config() {
        let report = ReloadReport {
            main_config: None,
            scrape_config: Ok(()),
        };
        assert!(!report.main_config_attempted());
        assert!(report.is_success());
    }

    #[test]
    fn test_report_failure_in_either_operation() {
        let main_failed = ReloadReport {
            main_config: Some(Err(fetch_error())),
            scrape_config: Ok(()),
        };
        assert!(main_failed.main_config_attempted());
        assert!(!main_failed.is_success());

        let scrape_failed = ReloadReport {
            main_config: Some(Ok(())),
            scrape_config: Err(fetch_error()),
        };
        assert!(!scrape_failed.is_success());
    }
}
