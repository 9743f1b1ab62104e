//! `rfetch fetch <url>` – reliable fetch with retry overrides.

use anyhow::{Context, Result};
use rfetch_core::config::RfetchConfig;
use rfetch_core::fetcher::run_reliable_fetch;
use rfetch_core::observer::CollectingObserver;
use std::io::Write;
use std::path::Path;
use url::Url;

pub async fn run_fetch(
    cfg: &RfetchConfig,
    url: &str,
    output: Option<&Path>,
    max_attempts: Option<u32>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let url = Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;

    let mut cfg = cfg.clone();
    if let Some(n) = max_attempts {
        cfg.retry.get_or_insert_with(Default::default).max_attempts = n;
    }
    if let Some(secs) = timeout_secs {
        cfg.per_attempt_timeout_secs = secs;
    }

    let observer = CollectingObserver::new();
    run_reliable_fetch(&url, &observer, &cfg)
        .await
        .with_context(|| format!("fetch of {url} exhausted its attempt budget"))?;

    // Exactly one payload per successful call.
    let payload = observer
        .received()
        .into_iter()
        .next()
        .context("fetch succeeded but no payload was observed")?;

    match output {
        Some(path) => {
            std::fs::write(path, &payload)
                .with_context(|| format!("writing payload to {}", path.display()))?;
            println!("Saved {} bytes to {}", payload.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(&payload)?;
        }
    }

    Ok(())
}
