mod file_config;

pub use file_config::{FeedConfig, FileConfig};

use anyhow::{bail, Result};
use clap::ValueEnum;

pub const DEFAULT_API_URL: &str = "https://app.wafrn.net/api";

/// Which notification endpoint family to page through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FeedVersion {
    /// Legacy six-substream scroll
    V2,
    /// Unified scroll
    #[default]
    V3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout_sec: u64,
    pub scheme: FeedVersion,
    pub pages: u32,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_sec: 30,
            scheme: FeedVersion::default(),
            pages: 1,
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub token: String,
    pub timeout_sec: u64,
    pub feed: FeedSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    pub scheme: FeedVersion,
    pub pages: u32,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let api_url = file.api_url.unwrap_or_else(|| cli.api_url.clone());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!("api_url must be an http(s) URL: {}", api_url);
        }

        let token = file
            .token
            .or_else(|| cli.token.clone())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("token must be specified via --token or in config file")
            })?;

        let timeout_sec = file.timeout_sec.unwrap_or(cli.timeout_sec);
        if timeout_sec == 0 {
            bail!("timeout_sec must be greater than 0");
        }

        let feed_file = file.feed.unwrap_or_default();
        let scheme = match feed_file.scheme {
            Some(s) => parse_value::<FeedVersion>(&s, "scheme")?,
            None => cli.scheme,
        };
        let output = match feed_file.output {
            Some(s) => parse_value::<OutputFormat>(&s, "output")?,
            None => cli.output,
        };
        let pages = feed_file.pages.unwrap_or(cli.pages);
        if pages == 0 {
            bail!("pages must be at least 1");
        }

        Ok(Self {
            api_url,
            token,
            timeout_sec,
            feed: FeedSettings {
                scheme,
                pages,
                output,
            },
        })
    }
}

/// Parses a config string using clap's ValueEnum trait, case insensitive.
fn parse_value<T: ValueEnum>(s: &str, field: &str) -> Result<T> {
    T::from_str(s, true).map_err(|_| anyhow::anyhow!("Invalid {} in config file: {}", field, s))
}
