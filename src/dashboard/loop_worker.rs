use std::future::Future;

use anyhow::Result;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info, log_warn};

/// Run `refresh` immediately and then every `period` until cancelled.
/// Failures and timeouts are logged and dropped; the next tick proceeds
/// as usual.
pub async fn polling_loop<F, Fut>(
    name: &'static str,
    period: Duration,
    tick_timeout: Duration,
    cancel_token: CancellationToken,
    mut refresh: F,
) where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match tokio::time::timeout(tick_timeout, refresh()).await {
                    Ok(Ok(())) => {},
                    Ok(Err(err)) => log_error!("{name} refresh failed: {err:#}"),
                    Err(_) => log_warn!("{name} refresh timeout (> {}ms)", tick_timeout.as_millis()),
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("{name} loop shutting down");
                break;
            }
        }
    }
}
