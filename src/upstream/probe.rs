//! Bounded fixed-interval readiness polling.
//!
//! The rendering server takes a while to come up after the process
//! starts. These loops poll it with a fixed delay between attempts
//! until it answers ready or the retry budget runs out. No backoff
//! and no jitter: the budget is the only bound.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::http::{ProbeClient, ProbeConfig};

/// One-shot readiness wait against a bare URL.
///
/// Builds a default-configured probe client and polls. Never errors:
/// a client that cannot be built counts the same as a server that
/// never answered.
pub async fn check_server(url: &str, retries: u32, delay: Duration) -> bool {
    let client = match ProbeClient::new(ProbeConfig::default(), url.to_string()) {
        Ok(client) => client,
        Err(e) => {
            warn!(url, error = %e, "Probe client build failed");
            return false;
        }
    };

    wait_until_ready(&client, retries, delay).await
}

/// Poll until the rendering server is ready.
///
/// Up to `retries` attempts, sleeping `delay` between them. A
/// transport failure (connection refused, timeout, DNS) counts as a
/// failed attempt and is absorbed into the terminal boolean; this
/// function never errors. Worst case it occupies the caller for
/// roughly `retries * delay`.
pub async fn wait_until_ready(client: &ProbeClient, retries: u32, delay: Duration) -> bool {
    for attempt in 1..=retries {
        match client.probe_once().await {
            Ok(true) => {
                info!(url = client.base_url(), attempt, "Rendering server is ready");
                return true;
            }
            Ok(false) => {
                debug!(url = client.base_url(), attempt, "Not ready yet");
            }
            // Server still starting up; keep polling.
            Err(e) => {
                debug!(url = client.base_url(), attempt, error = %e, "Probe failed");
            }
        }

        if attempt < retries {
            tokio::time::sleep(delay).await;
        }
    }

    warn!(
        url = client.base_url(),
        retries, "Rendering server never became ready"
    );
    false
}

/// [`wait_until_ready`], returning early when `cancel` fires.
///
/// The token is honored both mid-request and mid-sleep. Cancellation
/// yields `false`, same as budget exhaustion.
pub async fn wait_until_ready_cancellable(
    client: &ProbeClient,
    retries: u32,
    delay: Duration,
    cancel: &CancellationToken,
) -> bool {
    for attempt in 1..=retries {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!(url = client.base_url(), "Readiness wait cancelled");
                return false;
            }
            result = client.probe_once() => match result {
                Ok(true) => {
                    info!(url = client.base_url(), attempt, "Rendering server is ready");
                    return true;
                }
                Ok(false) => {
                    debug!(url = client.base_url(), attempt, "Not ready yet");
                }
                Err(e) => {
                    debug!(url = client.base_url(), attempt, error = %e, "Probe failed");
                }
            }
        }

        if attempt < retries {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!(url = client.base_url(), "Readiness wait cancelled");
                    return false;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    warn!(
        url = client.base_url(),
        retries, "Rendering server never became ready"
    );
    false
}
