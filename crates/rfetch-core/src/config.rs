use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry/backoff parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per fetch (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 1.0 = 1s).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds, before jitter.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            base_delay_secs: 1.0,
            max_delay_secs: 60,
        }
    }
}

/// Global configuration loaded from `~/.config/rfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfetchConfig {
    /// Wall-clock bound in seconds for a single fetch attempt, including
    /// connection setup.
    pub per_attempt_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Optional explicit path for the item database (None = XDG state dir).
    #[serde(default)]
    pub item_db_path: Option<PathBuf>,
}

impl Default for RfetchConfig {
    fn default() -> Self {
        Self {
            per_attempt_timeout_secs: 30,
            retry: None,
            item_db_path: None,
        }
    }
}

impl RfetchConfig {
    /// Per-attempt timeout as a duration.
    pub fn per_attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.per_attempt_timeout_secs)
    }

    /// Retry policy from the optional `[retry]` section, defaults otherwise.
    pub fn retry_policy(&self) -> RetryPolicy {
        let retry = self.retry.clone().unwrap_or_default();
        RetryPolicy {
            // A zero budget would mean "never attempt"; clamp to one try.
            max_attempts: retry.max_attempts.max(1),
            base_delay: Duration::from_secs_f64(retry.base_delay_secs.max(0.0)),
            max_delay: Duration::from_secs(retry.max_delay_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
