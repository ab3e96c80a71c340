use std::collections::BTreeMap;

use tracing::debug;

use super::errors::DiscoveryError;
use super::types::*;

/// Split the namespace parameter value on commas.
///
/// Pieces are kept as-is: no trimming, and empty pieces are preserved, so
/// `""` yields `[""]`. Generators decide what to do with blank names.
pub fn split_namespaces(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Convert discovered instances into `file_sd` target groups.
///
/// Instances without an address or exporter port are skipped. Output is
/// sorted by namespace, service and instance id so that unchanged
/// registrations produce byte-identical files.
pub fn build_target_groups(instances: &[DiscoveredInstance]) -> Vec<TargetGroup> {
    let mut sorted: Vec<&DiscoveredInstance> = instances.iter().collect();
    sorted.sort_by(|a, b| {
        (&a.namespace, &a.service, &a.instance_id).cmp(&(&b.namespace, &b.service, &b.instance_id))
    });

    sorted
        .into_iter()
        .filter_map(|instance| {
            let address = instance.attributes.get(ATTR_INSTANCE_IPV4);
            let port = instance.attributes.get(ATTR_EXPORTER_PORT);
            let (Some(address), Some(port)) = (address, port) else {
                debug!(
                    event = "core.discovery.instance_skipped",
                    namespace = %instance.namespace,
                    service = %instance.service,
                    instance_id = %instance.instance_id,
                    has_address = address.is_some(),
                    has_port = port.is_some(),
                );
                return None;
            };
            Some(TargetGroup {
                targets: vec![format!("{}:{}", address, port)],
                labels: instance_labels(instance),
            })
        })
        .collect()
}

fn instance_labels(instance: &DiscoveredInstance) -> BTreeMap<String, String> {
    let metrics_path = instance
        .attributes
        .get(ATTR_METRICS_PATH)
        .map(String::as_str)
        .unwrap_or(DEFAULT_METRICS_PATH);

    let mut labels = BTreeMap::from([
        ("__metrics_path__".to_string(), metrics_path.to_string()),
        ("namespace".to_string(), instance.namespace.clone()),
        ("service".to_string(), instance.service.clone()),
        ("instance_id".to_string(), instance.instance_id.clone()),
    ]);

    for (attribute, label) in [
        (ATTR_CLUSTER_NAME, "cluster"),
        (ATTR_TASK_DEFINITION_FAMILY, "taskdefinition"),
        (ATTR_SERVICE_NAME, "ecs_service"),
    ] {
        if let Some(value) = instance.attributes.get(attribute) {
            labels.insert(label.to_string(), value.clone());
        }
    }

    labels
}

/// Serialize target groups as a pretty-printed JSON array.
pub fn render_target_groups(groups: &[TargetGroup]) -> Result<String, DiscoveryError> {
    Ok(serde_json::to_string_pretty(groups)?)
}
