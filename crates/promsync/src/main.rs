use std::sync::Arc;

use promsync_core::config::loading::parse_bool;
use promsync_core::{CloudMapGenerator, Reloader, ReloaderConfig, SsmParameterStore, init_logging};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const ENV_QUIET: &str = "PROMSYNC_QUIET";

#[tokio::main]
async fn main() {
    init_logging(is_quiet(std::env::var(ENV_QUIET).ok().as_deref()));
    info!(
        event = "cli.started",
        version = env!("CARGO_PKG_VERSION"),
        "Prometheus configuration reloader started"
    );

    let config = ReloaderConfig::from_env();

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = Arc::new(SsmParameterStore::from_sdk_config(&sdk_config));
    let generator = Arc::new(CloudMapGenerator::from_sdk_config(&sdk_config));

    let reloader = Reloader::new(config, store, generator);
    reloader.startup().await;

    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(reloader.run(shutdown.clone()));

    shutdown_signal().await;
    shutdown.cancel();

    if let Err(e) = handle.await {
        error!(event = "cli.reload_task_failed", error = %e);
    }

    info!(event = "cli.shutdown_completed");
}

/// `PROMSYNC_QUIET` accepts the same boolean spellings as the other flags.
fn is_quiet(value: Option<&str>) -> bool {
    value
        .and_then(|v| parse_bool(ENV_QUIET, v).ok())
        .unwrap_or(false)
}

/// Wait for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(event = "cli.signal_handler_failed", signal = "ctrl_c", error = %e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(event = "cli.signal_handler_failed", signal = "sigterm", error = %e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!(event = "cli.shutdown_requested", signal = "ctrl_c");
        }
        _ = terminate => {
            info!(event = "cli.shutdown_requested", signal = "sigterm");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quiet() {
        assert!(!is_quiet(None));
        assert!(is_quiet(Some("true")));
        assert!(is_quiet(Some("1")));
        assert!(!is_quiet(Some("false")));
        assert!(!is_quiet(Some("loud")));
    }
}
