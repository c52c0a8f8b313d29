use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::SignalError;

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_feed_path() -> String {
    // The feed producer's actual file name.
    "sinais_lista.csv".to_string()
}

fn default_refresh_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the feed document relative to the base URL.
    #[serde(default = "default_feed_path")]
    pub feed_path: String,
    /// Seconds between refresh cycles. Different consumers run different
    /// cadences, so this is a parameter, not a constant.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            feed_path: default_feed_path(),
            refresh_secs: default_refresh_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FeedConfig {
    /// Full feed URL: validated base joined with the feed path.
    pub fn feed_url(&self) -> Result<Url, SignalError> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.feed_path)?)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub feed: FeedConfig,
}

impl AppConfig {
    /// Loads `config.yaml` (or `$CONFIG_PATH`). A missing file falls back
    /// to defaults; a file that exists but does not parse is an error.
    /// `FEED_BASE_URL` overrides the configured base URL either way.
    pub fn load() -> Result<Self, SignalError> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| SignalError::Config(format!("failed to read {}: {}", path, e)))?;

            // Strip BOM if present
            let content = content.strip_prefix("\u{feff}").unwrap_or(&content);

            serde_yaml::from_str(content)
                .map_err(|e| SignalError::Config(format!("failed to parse {}: {}", path, e)))?
        } else {
            AppConfig::default()
        };

        if let Ok(base_url) = env::var("FEED_BASE_URL") {
            config.feed.base_url = base_url;
        }

        Ok(config)
    }
}
