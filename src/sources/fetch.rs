use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::FetchConfig;

/// Shared HTTP plumbing for the platform fetchers.
///
/// Each platform adds its own `impl Fetcher` block. Public fetch methods never
/// fail: errors are logged and an empty batch is returned so the caller can
/// fall back to demo data.
pub struct Fetcher {
    pub(super) client: Client,
    pub(super) youtube_base_url: String,
    pub(super) graph_base_url: String,
    pub(super) x_base_url: String,
}

/// Platform APIs cap a single page at 100 items.
pub const PAGE_LIMIT: u32 = 100;

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            youtube_base_url: config.youtube_base_url.trim_end_matches('/').to_string(),
            graph_base_url: config.graph_base_url.trim_end_matches('/').to_string(),
            x_base_url: config.x_base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Fails with the status and body when the API did not answer 2xx.
pub(super) async fn ensure_success(response: Response, api: &str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{} API returned {}: {}", api, status, body);
    }
    Ok(response)
}
