//! The periodic refresh loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::ReloaderConfig;
use crate::config::defaults::{DEFAULT_RELOAD_FREQUENCY_SECS, MAX_RELOAD_FREQUENCY_SECS};
use crate::discovery::ScrapeConfigGenerator;
use crate::errors::PromsyncError;
use crate::params::ParameterStore;
use crate::reload::errors::ReloadError;
use crate::reload::handler;
use crate::reload::types::ReloadReport;

/// Owns the two config files and keeps them in sync with remote state.
///
/// The scrape config is refreshed on every tick. The main config is
/// refreshed on every second tick (the 2nd, 4th, ...) and only when
/// `allow_main_config_reload` is set.
pub struct Reloader {
    config: ReloaderConfig,
    store: Arc<dyn ParameterStore>,
    generator: Arc<dyn ScrapeConfigGenerator>,
    main_config_due: bool,
}

impl Reloader {
    pub fn new(
        config: ReloaderConfig,
        store: Arc<dyn ParameterStore>,
        generator: Arc<dyn ScrapeConfigGenerator>,
    ) -> Self {
        Self {
            config,
            store,
            generator,
            main_config_due: false,
        }
    }

    pub fn config(&self) -> &ReloaderConfig {
        &self.config
    }

    /// Initial load: fetch the main config and write the placeholder scrape
    /// config. Always runs both, independent of the reload settings.
    pub async fn startup(&self) -> ReloadReport {
        let main_config = handler::load_main_config(&self.config, self.store.as_ref()).await;
        log_failure("main_config_load", &main_config);

        let scrape_config = handler::init_scrape_config(&self.config);
        log_failure("scrape_config_init", &scrape_config);

        let report = ReloadReport {
            main_config: Some(main_config),
            scrape_config,
        };

        info!(
            event = "core.reload.startup_completed",
            success = report.is_success(),
            "Loaded initial configuration files"
        );

        report
    }

    /// Run one tick of the periodic phase.
    pub async fn tick(&mut self) -> ReloadReport {
        let main_config =
            if self.main_config_due && self.config.refresh.allow_main_config_reload {
                let result = handler::load_main_config(&self.config, self.store.as_ref()).await;
                log_failure("main_config_reload", &result);
                Some(result)
            } else {
                None
            };
        self.main_config_due = !self.main_config_due;

        let scrape_config = handler::reload_scrape_config(
            &self.config,
            self.store.as_ref(),
            self.generator.as_ref(),
        )
        .await;
        log_failure("scrape_config_reload", &scrape_config);

        ReloadReport {
            main_config,
            scrape_config,
        }
    }

    /// Tick every `reload_frequency` until `shutdown` is cancelled.
    ///
    /// The first tick fires one full period after the call. A tick that has
    /// started always runs to completion; cancellation is observed between
    /// ticks.
    pub async fn run(mut self, shutdown: CancellationToken) {
        let period = tick_period(self.config.refresh.reload_frequency);
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            event = "core.reload.loop_started",
            period_secs = period.as_secs(),
            allow_main_config_reload = self.config.refresh.allow_main_config_reload,
            "Periodic reloads in progress"
        );

        let mut ticks: u64 = 0;
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!(event = "core.reload.loop_stopped", ticks = ticks);
                    break;
                }
                _ = ticker.tick() => {
                    ticks += 1;
                    let report = self.tick().await;
                    if !report.is_success() {
                        warn!(
                            event = "core.reload.tick_incomplete",
                            tick = ticks,
                            "Keeping previous file contents until next tick"
                        );
                    }
                }
            }
        }
    }
}

/// Periods outside `1..=MAX_RELOAD_FREQUENCY_SECS` are replaced by the
/// default; a zero or overflowing period would panic inside the timer.
fn tick_period(configured: Duration) -> Duration {
    if configured.is_zero() || configured > Duration::from_secs(MAX_RELOAD_FREQUENCY_SECS) {
        warn!(
            event = "core.reload.invalid_period",
            configured_secs = configured.as_secs(),
            default_secs = DEFAULT_RELOAD_FREQUENCY_SECS,
            "Falling back to default reload frequency"
        );
        return Duration::from_secs(DEFAULT_RELOAD_FREQUENCY_SECS);
    }
    configured
}

fn log_failure(operation: &'static str, result: &Result<(), ReloadError>) {
    if let Err(e) = result {
        error!(
            event = "core.reload.operation_failed",
            operation = operation,
            error = %e,
            error_code = e.error_code()
        );
    }
}
