//! Default values and environment variable names.
//!
//! Every setting is optional. When a variable is unset the constant defined
//! here is used; when it is set but unparsable the loader logs a warning and
//! falls back to the same constant.

use crate::config::types::{ParameterNames, RefreshSettings};
use std::time::Duration;

pub const ENV_CONFIG_FILE_DIR: &str = "CONFIG_FILE_DIR";
pub const ENV_RELOAD_CONFIG: &str = "PROMETHEUS_RELOAD_CONFIG";
pub const ENV_RELOAD_FREQUENCY: &str = "CONFIG_RELOAD_FREQUENCY";
pub const ENV_SCRAPE_CONFIG_FILE: &str = "SCRAPE_CONFIG_FILE";
pub const ENV_MAIN_CONFIG_PARAM: &str = "PROMETHEUS_CONFIG_SSMPARAM_NAME";
pub const ENV_DISCOVERY_NAMESPACES_PARAM: &str = "DISCOVERY_NAMESPACE_SSMPARAM";

pub const DEFAULT_CONFIG_FILE_DIR: &str = "/etc/config/";
pub const DEFAULT_RELOAD_FREQUENCY_SECS: u64 = 30;
/// Longest accepted tick period (one day).
pub const MAX_RELOAD_FREQUENCY_SECS: u64 = 86_400;
pub const DEFAULT_SCRAPE_CONFIG_FILE: &str = "ecs-services.json";
pub const DEFAULT_MAIN_CONFIG_PARAM: &str = "ECS-Prometheus-Configuration";
pub const DEFAULT_DISCOVERY_NAMESPACES_PARAM: &str = "ECS-ServiceDiscovery-Namespaces";

/// File name of the main Prometheus configuration. Not configurable.
pub const MAIN_CONFIG_FILE: &str = "prometheus.yaml";

/// Placeholder written to the scrape config before the first discovery.
pub const EMPTY_SCRAPE_CONFIG: &str = "[]";

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            reload_frequency: Duration::from_secs(DEFAULT_RELOAD_FREQUENCY_SECS),
            allow_main_config_reload: false,
        }
    }
}

impl Default for ParameterNames {
    fn default() -> Self {
        Self {
            main_config: DEFAULT_MAIN_CONFIG_PARAM.to_string(),
            discovery_namespaces: DEFAULT_DISCOVERY_NAMESPACES_PARAM.to_string(),
        }
    }
}
