//! Watcher configuration loaded from `jobwatch.toml`.
//!
//! Every field has a default pointing at the public Underworld site, so the
//! file is optional and a bare invocation behaves like the hosted job.
//! The `DISCORD_WEBHOOK_URL` environment variable takes precedence over the
//! file for the webhook endpoint.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration for one watch run.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Page listing currently online players.
    #[serde(default = "default_online_url")]
    pub online_url: String,

    /// Top-100 ranking page.
    #[serde(default = "default_ranking_url")]
    pub ranking_url: String,

    /// Discord webhook endpoint; empty disables delivery.
    #[serde(default)]
    pub webhook_url: String,

    /// Where the roster snapshot lives between runs.
    #[serde(default = "default_state_path")]
    pub state_path: String,

    /// Optional newline-delimited quote file.
    #[serde(default = "default_quotes_path")]
    pub quotes_path: String,

    /// Per-request timeout for page fetches, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Per-request timeout for webhook deliveries, in seconds.
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,

    /// Pause between successive webhook deliveries, in milliseconds.
    #[serde(default = "default_notify_delay_ms")]
    pub notify_delay_ms: u64,
}

fn default_online_url() -> String {
    "https://pr-underworld.com/website/".to_string()
}

fn default_ranking_url() -> String {
    "https://pr-underworld.com/website/ranking/".to_string()
}

fn default_state_path() -> String {
    "data/state.json".to_string()
}

fn default_quotes_path() -> String {
    "data/quotes.txt".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_webhook_timeout_secs() -> u64 {
    15
}

fn default_notify_delay_ms() -> u64 {
    500
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            online_url: default_online_url(),
            ranking_url: default_ranking_url(),
            webhook_url: String::new(),
            state_path: default_state_path(),
            quotes_path: default_quotes_path(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            webhook_timeout_secs: default_webhook_timeout_secs(),
            notify_delay_ms: default_notify_delay_ms(),
        }
    }
}

impl WatchConfig {
    /// Load the configuration from `jobwatch.toml` in the current directory.
    /// Falls back to defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new("jobwatch.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<WatchConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment takes precedence over the file for the webhook URL.
        if let Ok(url) = std::env::var("DISCORD_WEBHOOK_URL")
            && !url.is_empty()
        {
            config.webhook_url = url;
        }

        Ok(config)
    }
}
