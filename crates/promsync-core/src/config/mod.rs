//! # Configuration System
//!
//! Environment-driven configuration for the reloader.
//!
//! ## Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `CONFIG_FILE_DIR` | `/etc/config/` |
//! | `PROMETHEUS_RELOAD_CONFIG` | `false` |
//! | `CONFIG_RELOAD_FREQUENCY` | `30` (seconds) |
//! | `SCRAPE_CONFIG_FILE` | `ecs-services.json` |
//! | `PROMETHEUS_CONFIG_SSMPARAM_NAME` | `ECS-Prometheus-Configuration` |
//! | `DISCOVERY_NAMESPACE_SSMPARAM` | `ECS-ServiceDiscovery-Namespaces` |
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use promsync_core::config::ReloaderConfig;
//!
//! let config = ReloaderConfig::from_env();
//! println!("{}", config.paths.main_config_path.display());
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

// Public API exports
pub use types::{ConfigPaths, ParameterNames, RefreshSettings, ReloaderConfig};

impl ReloaderConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// See [`loading::load_from_env`] for details.
    pub fn from_env() -> Self {
        loading::load_from_env()
    }

    /// Resolve the configuration through a custom variable lookup.
    ///
    /// See [`loading::load_from_lookup`] for details.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        loading::load_from_lookup(lookup)
    }
}
