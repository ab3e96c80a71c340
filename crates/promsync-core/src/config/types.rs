//! Configuration type definitions.

use std::path::PathBuf;
use std::time::Duration;

/// Absolute paths of the two files the reloader owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Prometheus main configuration, copied verbatim from SSM.
    pub main_config_path: PathBuf,
    /// `file_sd` target list generated from Cloud Map.
    pub scrape_config_path: PathBuf,
}

/// Timer settings for the periodic phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSettings {
    /// Period between ticks. Always at least one second.
    pub reload_frequency: Duration,
    /// Whether the main config is re-fetched on every second tick.
    pub allow_main_config_reload: bool,
}

/// Names of the SSM parameters the reloader reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNames {
    /// Parameter holding the full `prometheus.yaml` content.
    pub main_config: String,
    /// Parameter holding the comma-separated Cloud Map namespace list.
    pub discovery_namespaces: String,
}

/// Immutable reloader configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloaderConfig {
    pub paths: ConfigPaths,
    pub refresh: RefreshSettings,
    pub parameters: ParameterNames,
}
