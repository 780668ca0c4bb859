use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Connection settings (can override CLI)
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub timeout_sec: Option<u64>,

    // Feed settings
    pub feed: Option<FeedConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct FeedConfig {
    /// Notification scheme to page through: "v2" or "v3"
    pub scheme: Option<String>,
    pub pages: Option<u32>,
    /// Output format: "text" or "json"
    pub output: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
