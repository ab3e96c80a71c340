//! Scrape target discovery.
//!
//! [`ScrapeConfigGenerator`] turns the namespace list read from the parameter
//! store into the content of the scrape config file. [`CloudMapGenerator`] is
//! the shipped implementation; the pure conversion from instances to
//! `file_sd` target groups lives in [`operations`].

pub mod cloud_map;
pub mod errors;
pub mod operations;
pub mod traits;
pub mod types;

pub use cloud_map::CloudMapGenerator;
pub use errors::DiscoveryError;
pub use operations::{build_target_groups, render_target_groups, split_namespaces};
pub use traits::ScrapeConfigGenerator;
pub use types::{DiscoveredInstance, TargetGroup};
