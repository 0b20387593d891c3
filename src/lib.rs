pub mod api;
pub mod chart;
pub mod dashboard;
pub mod models;
pub mod segmentation;
pub mod settings;
pub mod units;
mod utils;

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use log::info;

use api::ApiClient;
use dashboard::DashboardController;
use settings::{SettingsStore, DEFAULT_SETTINGS_FILE};

pub use utils::logging::init_logging;

/// Run the dashboard until Ctrl-C. `settings_path` defaults to
/// `thermodash.json` in the working directory.
pub async fn run(settings_path: Option<PathBuf>) -> Result<()> {
    init_logging();

    info!("thermodash starting up...");

    let settings_path = settings_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let settings = Arc::new(SettingsStore::new(settings_path)?.with_env_overrides());
    let snapshot = settings.snapshot();

    let api = ApiClient::new(&snapshot.api_base_url, snapshot.request_timeout())?;
    let controller = DashboardController::new(api, settings);
    let mut updates = controller.subscribe();

    controller.start().await?;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}\n", controller.view().await);
            }
            _ = &mut shutdown => {
                info!("interrupt received");
                break;
            }
        }
    }

    controller.stop().await
}
