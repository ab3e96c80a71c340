//! AWS Cloud Map scrape config generator.

use std::collections::HashMap;

use aws_sdk_servicediscovery::Client;
use aws_sdk_servicediscovery::error::DisplayErrorContext;
use aws_sdk_servicediscovery::types::{FilterCondition, ServiceFilter, ServiceFilterName};
use tracing::{debug, info, warn};

use super::errors::DiscoveryError;
use super::operations::{build_target_groups, render_target_groups};
use super::traits::ScrapeConfigGenerator;
use super::types::DiscoveredInstance;

/// Generates `file_sd` targets from the instances registered in Cloud Map.
///
/// Every service of every requested namespace is scanned. Instance attributes
/// set by ECS service discovery (`AWS_INSTANCE_IPV4`) and by the task owner
/// (`ECS_PROMETHEUS_EXPORTER_PORT`, ...) become targets and labels.
#[derive(Debug, Clone)]
pub struct CloudMapGenerator {
    client: Client,
}

impl CloudMapGenerator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a generator from a shared SDK configuration.
    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }

    /// Map namespace name to namespace id for every namespace in the account.
    async fn namespace_ids(&self) -> Result<HashMap<String, String>, DiscoveryError> {
        let mut ids = HashMap::new();
        let mut pages = self.client.list_namespaces().into_paginator().send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| DiscoveryError::NamespaceLookupFailed {
                message: DisplayErrorContext(&e).to_string(),
            })?;
            for summary in page.namespaces() {
                if let (Some(name), Some(id)) = (summary.name(), summary.id()) {
                    ids.insert(name.to_string(), id.to_string());
                }
            }
        }

        Ok(ids)
    }

    /// List `(service_id, service_name)` pairs in a namespace.
    async fn services(
        &self,
        namespace: &str,
        namespace_id: &str,
    ) -> Result<Vec<(String, String)>, DiscoveryError> {
        let filter = ServiceFilter::builder()
            .name(ServiceFilterName::NamespaceId)
            .values(namespace_id)
            .condition(FilterCondition::Eq)
            .build()
            .map_err(|e| DiscoveryError::InvalidRequest {
                message: e.to_string(),
            })?;

        let mut services = Vec::new();
        let mut pages = self
            .client
            .list_services()
            .filters(filter)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| DiscoveryError::ServiceLookupFailed {
                namespace: namespace.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
            for summary in page.services() {
                if let (Some(id), Some(name)) = (summary.id(), summary.name()) {
                    services.push((id.to_string(), name.to_string()));
                }
            }
        }

        Ok(services)
    }

    async fn instances(
        &self,
        namespace: &str,
        service_id: &str,
        service: &str,
    ) -> Result<Vec<DiscoveredInstance>, DiscoveryError> {
        let mut instances = Vec::new();
        let mut pages = self
            .client
            .list_instances()
            .service_id(service_id)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| DiscoveryError::InstanceLookupFailed {
                namespace: namespace.to_string(),
                service: service.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
            for summary in page.instances() {
                let Some(instance_id) = summary.id() else {
                    continue;
                };
                instances.push(DiscoveredInstance {
                    namespace: namespace.to_string(),
                    service: service.to_string(),
                    instance_id: instance_id.to_string(),
                    attributes: summary.attributes().cloned().unwrap_or_default(),
                });
            }
        }

        Ok(instances)
    }
}

#[async_trait::async_trait]
impl ScrapeConfigGenerator for CloudMapGenerator {
    fn name(&self) -> &'static str {
        "cloud_map"
    }

    async fn generate(&self, namespaces: &[String]) -> Result<String, DiscoveryError> {
        let namespace_ids = self.namespace_ids().await?;
        let mut discovered = Vec::new();

        for namespace in namespaces {
            if namespace.trim().is_empty() {
                debug!(event = "core.discovery.blank_namespace_skipped");
                continue;
            }
            let Some(namespace_id) = namespace_ids.get(namespace) else {
                warn!(
                    event = "core.discovery.namespace_not_found",
                    namespace = %namespace,
                    "Namespace not found in Cloud Map, skipping"
                );
                continue;
            };

            for (service_id, service) in self.services(namespace, namespace_id).await? {
                let instances = self.instances(namespace, &service_id, &service).await?;
                debug!(
                    event = "core.discovery.service_scanned",
                    namespace = %namespace,
                    service = %service,
                    instances = instances.len()
                );
                discovered.extend(instances);
            }
        }

        let groups = build_target_groups(&discovered);
        info!(
            event = "core.discovery.generate_completed",
            namespaces = namespaces.len(),
            instances = discovered.len(),
            targets = groups.len()
        );

        render_target_groups(&groups)
    }
}
