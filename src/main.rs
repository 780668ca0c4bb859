use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wafrn_notifications::config::{
    AppConfig, CliConfig, FeedVersion, FileConfig, OutputFormat, DEFAULT_API_URL,
};
use wafrn_notifications::feed::{FeedScheme, InfiniteFeed, V2Scheme, V3Scheme};
use wafrn_notifications::{now_millis, BadgeTracker, NotificationsApi, WafrnClient};

mod cli_style;

#[derive(Parser, Debug)]
#[command(styles = cli_style::get_styles())]
struct CliArgs {
    /// Path to a TOML config file. Its values override the flags below.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// API root of the Wafrn instance.
    #[clap(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token of the logged in user.
    #[clap(long)]
    pub token: Option<String>,

    /// Timeout in seconds for API requests.
    #[clap(long, default_value_t = 30)]
    pub timeout_sec: u64,

    /// Notification endpoints to page through.
    #[clap(long, value_enum, default_value_t = FeedVersion::V3)]
    pub scheme: FeedVersion,

    /// Number of pages to fetch.
    #[clap(short, long, default_value_t = 1)]
    pub pages: u32,

    /// How to print the notification list.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            timeout_sec: self.timeout_sec,
            scheme: self.scheme,
            pages: self.pages,
            output: self.output,
        }
    }
}

/// Fetch up to `pages` pages of one stream, stopping early when it runs out.
async fn scroll<S: FeedScheme>(feed: &mut InfiniteFeed<S>, pages: u32) -> Result<()> {
    let query_key = feed.query_key();
    for _ in 0..pages {
        let fetched = feed
            .fetch_next_page()
            .await
            .with_context(|| format!("Failed to fetch {} page", query_key))?;
        if fetched.is_none() {
            info!("Reached the end of the notification feed");
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!(
        "Fetching {} page(s) of {:?} notifications from {}",
        config.feed.pages, config.feed.scheme, config.api_url
    );
    let client = WafrnClient::new(
        config.api_url.clone(),
        config.token.clone(),
        config.timeout_sec,
    )?;
    let api: Arc<dyn NotificationsApi> = Arc::new(client);

    let now = now_millis();
    let badges = Arc::new(BadgeTracker::new(api.clone(), now));
    let json = config.feed.output == OutputFormat::Json;

    match config.feed.scheme {
        FeedVersion::V2 => {
            let mut feed = InfiniteFeed::new(V2Scheme, api, now).with_hook(badges.clone());
            scroll(&mut feed, config.feed.pages).await?;
            let notifications = feed.notifications();
            if json {
                println!("{}", serde_json::to_string_pretty(&notifications)?);
            } else {
                notifications.iter().for_each(cli_style::print_notification);
            }
        }
        FeedVersion::V3 => {
            let mut feed = InfiniteFeed::new(V3Scheme, api, now).with_hook(badges.clone());
            scroll(&mut feed, config.feed.pages).await?;
            let notifications = feed.notifications();
            if json {
                println!("{}", serde_json::to_string_pretty(&notifications)?);
            } else {
                notifications
                    .iter()
                    .for_each(cli_style::print_notification_v3);
            }
        }
    }

    if !json {
        if let Some(counts) = badges.latest() {
            cli_style::print_badges(&counts);
        }
    }

    Ok(())
}
