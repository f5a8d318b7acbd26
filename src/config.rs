use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub report: ReportConfig,
    // Loaded from env
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub max_results: u32,
    pub timeout_secs: u64,
    pub youtube_base_url: String,
    pub graph_base_url: String,
    pub x_base_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_results: 200,
            timeout_secs: 15,
            youtube_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            graph_base_url: "https://graph.facebook.com/v15.0".to_string(),
            x_base_url: "https://api.twitter.com/2".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output: PathBuf,
    /// Optional machine-readable export: "jsonl" or "csv".
    pub export: Option<String>,
    pub export_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("comment_report.html"),
            export: None,
            export_dir: PathBuf::from("data"),
        }
    }
}

/// Platform API secrets. Each one is optional; a missing secret sends that
/// platform straight to demo data.
#[derive(Debug, Default, Clone)]
pub struct Credentials {
    pub youtube_api_key: Option<String>,
    pub facebook_access_token: Option<String>,
    pub twitter_bearer_token: Option<String>,
    pub linkedin_access_token: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            youtube_api_key: env_var("YOUTUBE_API_KEY"),
            facebook_access_token: env_var("FACEBOOK_ACCESS_TOKEN"),
            twitter_bearer_token: env_var("TWITTER_BEARER_TOKEN")
                .or_else(|| env_var("TWITTER_BEARER"))
                .or_else(|| env_var("TWITTER_TOKEN")),
            linkedin_access_token: env_var("LINKEDIN_ACCESS_TOKEN"),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Reads `.env` and `config.toml` (if present), then secrets from env.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = if Path::new(CONFIG_FILE).exists() {
            let config_text =
                std::fs::read_to_string(CONFIG_FILE).context("Failed to read config.toml")?;
            Self::from_toml(&config_text)?
        } else {
            AppConfig::default()
        };

        config.credentials = Credentials::from_env();
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config.toml")
    }
}
