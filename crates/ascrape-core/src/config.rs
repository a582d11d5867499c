use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::fetch::RequestHeaders;

/// Desktop browser identity sent when no user agent is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Network policy for one fetcher. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Upper bound on the whole request (connect + transfer).
    pub request_timeout: Duration,
    /// Minimum spacing between consecutive fetches of the same fetcher.
    pub request_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl FetchConfig {
    /// Headers sent with every request issued under this config.
    pub fn headers(&self) -> RequestHeaders {
        RequestHeaders::from_config(self)
    }

    /// Overlay the values present in a config file onto `self`.
    pub fn with_file(mut self, file: &ConfigFile) -> Self {
        if let Some(ua) = &file.user_agent {
            self.user_agent = ua.clone();
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.request_delay_secs {
            match Duration::try_from_secs_f64(secs.max(0.0)) {
                Ok(delay) => self.request_delay = delay,
                Err(e) => tracing::warn!("ignoring request_delay_secs = {}: {}", secs, e),
            }
        }
        self
    }
}

/// On-disk shape of an optional `--config` TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in whole seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Delay between fetches in seconds (e.g. 0.5 = 500ms).
    #[serde(default)]
    pub request_delay_secs: Option<f64>,
}

/// Load a config file from an explicit path.
pub fn load_from(path: &Path) -> Result<ConfigFile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), file);
    Ok(file)
}
