//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::render::DEFAULT_TIME_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server origin; `/api/messages` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Milliseconds between poll cycles
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// chrono strftime pattern for message times
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Per-request timeout. Unset means requests may hang indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Name pre-filled in the compose form
    #[serde(default)]
    pub default_name: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}
fn default_poll_interval_ms() -> u64 {
    1000
}
fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file means defaults (env still applies).
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load(config_path);
        }
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("POLLCHAT_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(ms) = std::env::var("POLLCHAT_POLL_INTERVAL_MS") {
            self.poll_interval_ms = ms
                .parse()
                .with_context(|| format!("POLLCHAT_POLL_INTERVAL_MS is not a number: {}", ms))?;
        }
        if let Ok(fmt) = std::env::var("POLLCHAT_TIME_FORMAT") {
            self.time_format = fmt;
        }
        if let Ok(name) = std::env::var("POLLCHAT_NAME") {
            self.default_name = Some(name);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://, got {}", self.base_url);
        }
        if self.poll_interval_ms == 0 {
            anyhow::bail!("poll_interval_ms must be greater than zero");
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("time_format is not a valid strftime pattern: {}", self.time_format);
        }
        Ok(())
    }

    /// Full URL of the messages endpoint
    pub fn messages_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            crate::types::MESSAGES_PATH
        )
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            time_format: default_time_format(),
            request_timeout_secs: None,
            default_name: None,
        }
    }
}
