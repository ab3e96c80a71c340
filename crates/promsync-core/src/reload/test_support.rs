//! In-memory collaborators for reload tests.

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use crate::config::loading::resolve_paths;
use crate::config::{ParameterNames, RefreshSettings, ReloaderConfig};
use crate::discovery::{DiscoveryError, ScrapeConfigGenerator};
use crate::params::{ParameterError, ParameterStore};

pub(crate) fn test_config(dir: &Path, allow_main_config_reload: bool) -> ReloaderConfig {
    ReloaderConfig {
        paths: resolve_paths(dir, "ecs-services.json"),
        refresh: RefreshSettings {
            reload_frequency: Duration::from_secs(30),
            allow_main_config_reload,
        },
        parameters: ParameterNames::default(),
    }
}

/// Parameter store returning scripted values per name.
///
/// Each fetch consumes the next scripted value; the last one repeats.
/// A `None` entry fails the fetch.
#[derive(Default)]
pub(crate) struct ScriptedStore {
    scripts: Mutex<HashMap<String, VecDeque<Option<String>>>>,
    fetches: Mutex<Vec<String>>,
}

impl ScriptedStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn script(self, name: &str, values: &[Option<&str>]) -> Self {
        self.scripts.lock().unwrap().insert(
            name.to_string(),
            values.iter().map(|v| v.map(str::to_string)).collect(),
        );
        self
    }

    pub(crate) fn fetch_count(&self, name: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.as_str() == name)
            .count()
    }
}

#[async_trait::async_trait]
impl ParameterStore for ScriptedStore {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self, name: &str) -> Result<String, ParameterError> {
        self.fetches.lock().unwrap().push(name.to_string());

        let mut scripts = self.scripts.lock().unwrap();
        let queue = scripts
            .get_mut(name)
            .ok_or_else(|| ParameterError::NotFound {
                name: name.to_string(),
            })?;
        let value = if queue.len() > 1 {
            queue.pop_front().flatten()
        } else {
            queue.front().cloned().flatten()
        };

        value.ok_or_else(|| ParameterError::Request {
            name: name.to_string(),
            message: "scripted failure".to_string(),
        })
    }
}

/// Generator that renders the namespace list as a JSON array of strings.
#[derive(Default)]
pub(crate) struct EchoGenerator {
    calls: Mutex<Vec<Vec<String>>>,
}

impl EchoGenerator {
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ScrapeConfigGenerator for EchoGenerator {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn generate(&self, namespaces: &[String]) -> Result<String, DiscoveryError> {
        self.calls.lock().unwrap().push(namespaces.to_vec());
        Ok(serde_json::to_string(namespaces)?)
    }
}
