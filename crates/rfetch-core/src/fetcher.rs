//! Single-attempt HTTP fetch and the reliable-fetch entry point.
//!
//! `fetch_once` performs exactly one bounded GET; retry policy lives entirely
//! in [`crate::retry`]. `run_reliable_fetch` wires the two together with an
//! observer.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::RfetchConfig;
use crate::observer::ResultsObserver;
use crate::retry::{run_with_retry, FetchError};

/// Performs one GET round trip bounded by `timeout` (connection setup and
/// body read included). Returns the raw body on a 2xx status; any transport
/// error maps to [`FetchError::Network`] and any other status to
/// [`FetchError::Http`] with the body kept for diagnostics. Never retries.
pub async fn fetch_once(
    client: &Client,
    url: &Url,
    timeout: Duration,
) -> Result<Bytes, FetchError> {
    let response = client.get(url.clone()).timeout(timeout).send().await?;
    let status = response.status();
    if !status.is_success() {
        // Body read best-effort: losing it must not mask the status.
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Http {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.bytes().await?)
}

/// Fetches `url`, retrying transient failures per `config`, and hands the
/// payload to `observer` exactly once on success.
///
/// An `Err` return means the attempt budget was exhausted; the error is the
/// final attempt's failure with original classification and detail, and the
/// observer has not been invoked. The `Client` (the connection factory) is
/// scoped to this call, so concurrent fetches are fully independent.
pub async fn run_reliable_fetch(
    url: &Url,
    observer: &dyn ResultsObserver,
    config: &RfetchConfig,
) -> Result<(), FetchError> {
    let client = Client::new();
    let policy = config.retry_policy();
    let timeout = config.per_attempt_timeout();
    let mut rng = StdRng::from_entropy();

    let payload = run_with_retry(&policy, &mut rng, |attempt| {
        let client = client.clone();
        let url = url.clone();
        async move {
            debug!(%url, attempt, "fetch attempt");
            fetch_once(&client, &url, timeout).await
        }
    })
    .await?;

    info!(%url, bytes = payload.len(), "fetch succeeded");
    observer.observe(payload);
    Ok(())
}
