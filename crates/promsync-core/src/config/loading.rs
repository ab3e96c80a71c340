//! Configuration loading from the environment.
//!
//! All values are resolved once at startup. Parse failures never abort
//! startup: they are logged and the documented default is used instead.

use crate::config::defaults::*;
use crate::config::types::{ConfigPaths, ParameterNames, RefreshSettings, ReloaderConfig};
use crate::errors::ConfigError;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Load the reloader configuration from the process environment.
pub fn load_from_env() -> ReloaderConfig {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load the reloader configuration through an arbitrary variable lookup.
///
/// `lookup` returns `None` for unset variables.
pub fn load_from_lookup<F>(lookup: F) -> ReloaderConfig
where
    F: Fn(&str) -> Option<String>,
{
    // An empty directory would resolve to relative paths.
    let config_dir = lookup(ENV_CONFIG_FILE_DIR)
        .filter(|dir| !dir.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE_DIR.into());

    let allow_main_config_reload = match lookup(ENV_RELOAD_CONFIG) {
        Some(raw) => parse_bool(ENV_RELOAD_CONFIG, &raw).unwrap_or_else(|e| {
            warn!(
                event = "core.config.invalid_value",
                var = ENV_RELOAD_CONFIG,
                error = %e,
                "Falling back to main config reload disabled"
            );
            false
        }),
        None => false,
    };

    let reload_frequency = match lookup(ENV_RELOAD_FREQUENCY) {
        Some(raw) => parse_reload_frequency(&raw).unwrap_or_else(|e| {
            warn!(
                event = "core.config.invalid_value",
                var = ENV_RELOAD_FREQUENCY,
                error = %e,
                default_secs = DEFAULT_RELOAD_FREQUENCY_SECS,
                "Falling back to default reload frequency"
            );
            Duration::from_secs(DEFAULT_RELOAD_FREQUENCY_SECS)
        }),
        None => Duration::from_secs(DEFAULT_RELOAD_FREQUENCY_SECS),
    };

    let scrape_config_file =
        lookup(ENV_SCRAPE_CONFIG_FILE).unwrap_or_else(|| DEFAULT_SCRAPE_CONFIG_FILE.into());

    let parameters = ParameterNames {
        main_config: lookup(ENV_MAIN_CONFIG_PARAM)
            .unwrap_or_else(|| DEFAULT_MAIN_CONFIG_PARAM.into()),
        discovery_namespaces: lookup(ENV_DISCOVERY_NAMESPACES_PARAM)
            .unwrap_or_else(|| DEFAULT_DISCOVERY_NAMESPACES_PARAM.into()),
    };

    let config = ReloaderConfig {
        paths: resolve_paths(Path::new(&config_dir), &scrape_config_file),
        refresh: RefreshSettings {
            reload_frequency,
            allow_main_config_reload,
        },
        parameters,
    };

    info!(
        event = "core.config.loaded",
        main_config_path = %config.paths.main_config_path.display(),
        scrape_config_path = %config.paths.scrape_config_path.display(),
        reload_frequency_secs = config.refresh.reload_frequency.as_secs(),
        allow_main_config_reload = config.refresh.allow_main_config_reload,
        main_config_param = %config.parameters.main_config,
        discovery_namespaces_param = %config.parameters.discovery_namespaces,
    );

    config
}

/// Join the base directory with the two fixed file names.
pub fn resolve_paths(config_dir: &Path, scrape_config_file: &str) -> ConfigPaths {
    ConfigPaths {
        main_config_path: config_dir.join(MAIN_CONFIG_FILE),
        scrape_config_path: config_dir.join(scrape_config_file),
    }
}

/// Parse a boolean using the conventional spellings.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            message: "expected a boolean".to_string(),
        }),
    }
}

/// Parse the tick period as a positive whole number of seconds, at most
/// [`MAX_RELOAD_FREQUENCY_SECS`].
pub fn parse_reload_frequency(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > MAX_RELOAD_FREQUENCY_SECS => Err(ConfigError::InvalidValue {
            var: ENV_RELOAD_FREQUENCY,
            value: raw.to_string(),
            message: format!("must not exceed {} seconds", MAX_RELOAD_FREQUENCY_SECS),
        }),
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            var: ENV_RELOAD_FREQUENCY,
            value: raw.to_string(),
            message: "expected a positive number of seconds".to_string(),
        }),
    }
}
