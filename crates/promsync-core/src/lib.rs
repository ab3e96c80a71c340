//! promsync-core: Core library for keeping Prometheus configuration in sync
//! with remote state.
//!
//! Prometheus runs next to this sidecar and reads two files from a shared
//! directory. The main configuration is copied verbatim from an SSM parameter;
//! the scrape target list is generated from the services registered in a set
//! of Cloud Map namespaces.
//!
//! # Main Entry Points
//!
//! - [`config`] - Environment-driven configuration
//! - [`reload`] - Startup load and the periodic refresh loop
//! - [`params`] - Parameter store seam and the SSM adapter
//! - [`discovery`] - Scrape config generator seam and the Cloud Map adapter
//! - [`files`] - Atomic config file writes

pub mod config;
pub mod discovery;
pub mod errors;
pub mod files;
pub mod logging;
pub mod params;
pub mod reload;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigPaths, ParameterNames, RefreshSettings, ReloaderConfig};
pub use discovery::{CloudMapGenerator, DiscoveryError, ScrapeConfigGenerator};
pub use errors::PromsyncError;
pub use params::{ParameterError, ParameterStore, SsmParameterStore};
pub use reload::{ReloadError, ReloadReport, Reloader};

// Re-export logging initialization
pub use logging::init_logging;
