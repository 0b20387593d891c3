use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time::Duration,
};
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::chart::ChartHandle;
use crate::models::{Reading, TimeRange};
use crate::settings::SettingsStore;

use super::loop_worker::polling_loop;
use super::state::DashboardState;
use super::view::DashboardView;

/// Refresh cadence for the two polling loops.
#[derive(Debug, Clone, Copy)]
pub struct RefreshSchedule {
    pub current_every: Duration,
    pub history_every: Duration,
    pub tick_timeout: Duration,
}

struct PollingTasks {
    cancel_token: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct DashboardController {
    api: ApiClient,
    state: Arc<Mutex<DashboardState>>,
    settings: Arc<SettingsStore>,
    chart_output: Option<PathBuf>,
    schedule: RefreshSchedule,
    tasks: Arc<Mutex<Option<PollingTasks>>>,
    revision: Arc<watch::Sender<u64>>,
}

impl DashboardController {
    pub fn new(api: ApiClient, settings: Arc<SettingsStore>) -> Self {
        let snapshot = settings.snapshot();
        let schedule = RefreshSchedule {
            current_every: snapshot.current_refresh(),
            history_every: snapshot.history_refresh(),
            tick_timeout: snapshot.request_timeout() * 2,
        };
        let state = DashboardState::new(
            snapshot.unit,
            snapshot.label_zone,
            snapshot.selected_range,
        );
        let (revision, _) = watch::channel(0);

        Self {
            api,
            state: Arc::new(Mutex::new(state)),
            settings,
            chart_output: snapshot.chart_output,
            schedule,
            tasks: Arc::new(Mutex::new(None)),
            revision: Arc::new(revision),
        }
    }

    pub fn with_schedule(mut self, schedule: RefreshSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Receiver bumped after every successful refresh.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub async fn view(&self) -> DashboardView {
        self.state.lock().await.view()
    }

    pub async fn chart(&self) -> Option<ChartHandle> {
        self.state.lock().await.chart.clone()
    }

    pub async fn selected_range(&self) -> TimeRange {
        self.state.lock().await.selected_range
    }

    pub async fn refresh_current(&self) -> Result<()> {
        let reading = self
            .api
            .current()
            .await
            .context("failed to load current reading")?;
        self.state.lock().await.apply_current(reading);
        self.bump_revision();
        Ok(())
    }

    pub async fn refresh_statistics(&self, range: TimeRange) -> Result<()> {
        let statistics = self
            .api
            .statistics(range)
            .await
            .context("failed to load statistics")?;
        self.state.lock().await.apply_statistics(statistics);
        self.bump_revision();
        Ok(())
    }

    /// Reload history for the selected range, rebuild the chart, then
    /// reload statistics. A statistics failure does not undo the chart.
    pub async fn refresh_history(&self) -> Result<()> {
        let range = self.selected_range().await;
        let readings = self
            .api
            .temperatures(range)
            .await
            .with_context(|| format!("failed to load {} of history", range.label()))?;

        self.apply_history(&readings).await;

        if let Err(err) = self.refresh_statistics(range).await {
            log::error!("{err:#}");
        }
        Ok(())
    }

    /// Swap in the new chart and export it. An export failure is logged
    /// and does not affect the refresh.
    async fn apply_history(&self, readings: &[Reading]) {
        let chart = {
            let mut state = self.state.lock().await;
            if let Some(old) = state.apply_history(readings) {
                log::debug!("discarding chart generation {}", old.generation);
            }
            state.chart.clone()
        };
        self.bump_revision();

        if let (Some(path), Some(chart)) = (&self.chart_output, chart) {
            if let Err(err) = chart.write_to(path) {
                warn!("chart export skipped: {err:#}");
            }
        }
    }

    /// Switch the history range, remember it, and reload immediately.
    pub async fn select_range(&self, range: TimeRange) -> Result<()> {
        self.state.lock().await.selected_range = range;
        if let Err(err) = self.settings.update_selected_range(range) {
            warn!("could not persist range selection: {err:#}");
        }
        self.refresh_history().await
    }

    pub async fn is_running(&self) -> bool {
        self.tasks.lock().await.is_some()
    }

    pub async fn start(&self) -> Result<()> {
        let mut tasks = self.tasks.lock().await;
        if tasks.is_some() {
            bail!("dashboard polling already active");
        }

        match self.api.health().await {
            Ok(health) if health.is_healthy() => info!(
                "API at {} is healthy ({})",
                self.api.base_url(),
                health.service.as_deref().unwrap_or("unknown service")
            ),
            Ok(health) => warn!("API at {} reports status {}", self.api.base_url(), health.status),
            Err(err) => warn!("API health check failed: {err:#}"),
        }

        let cancel_token = CancellationToken::new();
        let current = {
            let controller = self.clone();
            tokio::spawn(polling_loop(
                "current",
                self.schedule.current_every,
                self.schedule.tick_timeout,
                cancel_token.clone(),
                move || {
                    let controller = controller.clone();
                    async move { controller.refresh_current().await }
                },
            ))
        };
        let history = {
            let controller = self.clone();
            tokio::spawn(polling_loop(
                "history",
                self.schedule.history_every,
                self.schedule.tick_timeout,
                cancel_token.clone(),
                move || {
                    let controller = controller.clone();
                    async move { controller.refresh_history().await }
                },
            ))
        };

        *tasks = Some(PollingTasks {
            cancel_token,
            handles: vec![current, history],
        });
        info!("dashboard polling started");
        Ok(())
    }

    pub async fn stop(&self) -> Result<()> {
        let Some(tasks) = self.tasks.lock().await.take() else {
            return Ok(());
        };

        tasks.cancel_token.cancel();
        for handle in tasks.handles {
            handle.await.context("polling loop task failed to join")?;
        }
        info!("dashboard polling stopped");
        Ok(())
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
