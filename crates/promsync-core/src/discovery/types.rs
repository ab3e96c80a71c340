use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Cloud Map instance attribute holding the task's private IPv4 address.
pub const ATTR_INSTANCE_IPV4: &str = "AWS_INSTANCE_IPV4";
/// Port the task's Prometheus exporter listens on.
pub const ATTR_EXPORTER_PORT: &str = "ECS_PROMETHEUS_EXPORTER_PORT";
/// Optional metrics path override.
pub const ATTR_METRICS_PATH: &str = "ECS_PROMETHEUS_METRICS_PATH";
pub const ATTR_CLUSTER_NAME: &str = "ECS_CLUSTER_NAME";
pub const ATTR_SERVICE_NAME: &str = "ECS_SERVICE_NAME";
pub const ATTR_TASK_DEFINITION_FAMILY: &str = "ECS_TASK_DEFINITION_FAMILY";

pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// A registered Cloud Map instance together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredInstance {
    pub namespace: String,
    pub service: String,
    pub instance_id: String,
    pub attributes: HashMap<String, String>,
}

/// One entry of a Prometheus `file_sd` target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGroup {
    pub targets: Vec<String>,
    pub labels: BTreeMap<String, String>,
}
