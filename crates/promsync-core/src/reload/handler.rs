use crate::config::ReloaderConfig;
use crate::config::defaults::EMPTY_SCRAPE_CONFIG;
use crate::discovery::{ScrapeConfigGenerator, split_namespaces};
use crate::files::{write_config_file, write_config_file_async};
use crate::params::ParameterStore;
use crate::reload::errors::ReloadError;
use tracing::{debug, info};

/// Fetch the main config parameter and overwrite the main config file.
///
/// Used both for the initial load and for periodic reloads. A failed fetch
/// leaves the existing file untouched.
pub async fn load_main_config(
    config: &ReloaderConfig,
    store: &dyn ParameterStore,
) -> Result<(), ReloadError> {
    let parameter = &config.parameters.main_config;
    let path = &config.paths.main_config_path;

    debug!(
        event = "core.reload.main_config_started",
        store = store.name(),
        parameter = %parameter,
        path = %path.display()
    );

    let content = store.fetch(parameter).await?;
    let bytes = content.len();
    write_config_file_async(path, content.into_bytes()).await?;

    info!(
        event = "core.reload.main_config_completed",
        parameter = %parameter,
        path = %path.display(),
        bytes = bytes
    );

    Ok(())
}

/// Write the empty placeholder target list to the scrape config file.
pub fn init_scrape_config(config: &ReloaderConfig) -> Result<(), ReloadError> {
    let path = &config.paths.scrape_config_path;
    write_config_file(path, EMPTY_SCRAPE_CONFIG.as_bytes())?;

    info!(
        event = "core.reload.scrape_config_initialized",
        path = %path.display()
    );

    Ok(())
}

/// Fetch the namespace list, generate targets and overwrite the scrape
/// config file.
pub async fn reload_scrape_config(
    config: &ReloaderConfig,
    store: &dyn ParameterStore,
    generator: &dyn ScrapeConfigGenerator,
) -> Result<(), ReloadError> {
    let parameter = &config.parameters.discovery_namespaces;
    let path = &config.paths.scrape_config_path;

    let raw_namespaces = store.fetch(parameter).await?;
    let namespaces = split_namespaces(&raw_namespaces);

    debug!(
        event = "core.reload.scrape_config_started",
        store = store.name(),
        generator = generator.name(),
        namespaces = ?namespaces
    );

    let content = generator.generate(&namespaces).await?;
    let bytes = content.len();
    write_config_file_async(path, content.into_bytes()).await?;

    info!(
        event = "core.reload.scrape_config_completed",
        path = %path.display(),
        namespaces = namespaces.len(),
        bytes = bytes
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reload::test_support::{EchoGenerator, ScriptedStore, test_config};
    use std::fs;

    #[tokio::test]
    async fn test_load_main_config_writes_raw_value() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), false);
        let store = ScriptedStore::new().script(
            "ECS-Prometheus-Configuration",
            &[Some("global:\n  scrape_interval: 30s\n")],
        );

        load_main_config(&config, &store).await.unwrap();

        assert_eq!(
            fs::read_to_string(&config.paths.main_config_path).unwrap(),
            "global:\n  scrape_interval: 30s\n"
        );
    }

    #[tokio::test]
    async fn test_load_main_config_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir.path().join("missing"), false);
        let store = ScriptedStore::new().script("ECS-Prometheus-Configuration", &[Some("x")]);

        let err = load_main_config(&config, &store).await.unwrap_err();

        assert!(matches!(err, ReloadError::WriteFailed { .. }));
    }

    #[test]
    fn test_init_scrape_config_writes_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), false);
        fs::write(&config.paths.scrape_config_path, "stale").unwrap();

        init_scrape_config(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&config.paths.scrape_config_path).unwrap(),
            "[]"
        );
    }

    #[tokio::test]
    async fn test_reload_scrape_config_with_empty_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), false);
        let store = ScriptedStore::new().script("ECS-ServiceDiscovery-Namespaces", &[Some("")]);
        let generator = EchoGenerator::default();

        reload_scrape_config(&config, &store, &generator).await.unwrap();

        assert_eq!(generator.calls(), vec![vec![""]]);
        assert_eq!(
            fs::read_to_string(&config.paths.scrape_config_path).unwrap(),
            r#"[""]"#
        );
    }
}
