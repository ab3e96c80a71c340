//! Scrape config generator trait definition.

use super::errors::DiscoveryError;

/// Turns a list of discovery namespaces into scrape config file content.
///
/// The reloader treats the output as opaque bytes and writes it verbatim.
#[async_trait::async_trait]
pub trait ScrapeConfigGenerator: Send + Sync {
    /// Short name of this generator for logging (e.g., "cloud_map").
    fn name(&self) -> &'static str;

    /// Produce the serialized target list for the given namespaces.
    async fn generate(&self, namespaces: &[String]) -> Result<String, DiscoveryError>;
}
