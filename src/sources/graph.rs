//! Facebook and Instagram comments through the Graph API.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::fetch::{ensure_success, Fetcher, PAGE_LIMIT};
use super::normalize::SourceRecord;
use crate::analysis::Platform;

#[derive(Deserialize)]
struct GraphComments {
    #[serde(default)]
    data: Vec<Map<String, Value>>,
}

impl Fetcher {
    pub async fn facebook(&self, object_id: &str, access_token: &str, max_results: u32) -> Vec<SourceRecord> {
        self.graph(Platform::Facebook, object_id, access_token, max_results)
            .await
    }

    pub async fn instagram(&self, media_id: &str, access_token: &str, max_results: u32) -> Vec<SourceRecord> {
        self.graph(Platform::Instagram, media_id, access_token, max_results)
            .await
    }

    async fn graph(&self, platform: Platform, id: &str, access_token: &str, max_results: u32) -> Vec<SourceRecord> {
        let api = graph_label(platform);
        if access_token.is_empty() {
            warn!("[{}] No access token provided. Try setting FACEBOOK_ACCESS_TOKEN.", api);
            return Vec::new();
        }

        match self.try_graph(platform, id, access_token, max_results).await {
            Ok(records) => {
                info!("[{}] Fetched {} comments", api, records.len());
                records
            }
            Err(e) => {
                error!("[{}] Error fetching comments: {:#}", api, e);
                Vec::new()
            }
        }
    }

    async fn try_graph(
        &self,
        platform: Platform,
        id: &str,
        access_token: &str,
        max_results: u32,
    ) -> Result<Vec<SourceRecord>> {
        let url = format!("{}/{}/comments", self.graph_base_url, id);
        let limit = max_results.min(PAGE_LIMIT).to_string();

        let mut request = self
            .client
            .get(&url)
            .query(&[("access_token", access_token), ("limit", limit.as_str())]);
        if platform == Platform::Facebook {
            request = request.query(&[("filter", "stream")]);
        }

        let response = request
            .send()
            .await
            .context("Graph API request failed")?;

        let comments: GraphComments = ensure_success(response, graph_label(platform))
            .await?
            .json()
            .await
            .context("Failed to parse Graph API response")?;

        Ok(comments
            .data
            .into_iter()
            .map(|item| flatten_item(item, platform))
            .collect())
    }
}

fn graph_label(platform: Platform) -> &'static str {
    if platform == Platform::Instagram {
        "Instagram"
    } else {
        "Facebook"
    }
}

/// Lifts `from.name` into `author` unless the item already names a username.
fn flatten_item(item: Map<String, Value>, platform: Platform) -> SourceRecord {
    let from_name = item
        .get("from")
        .and_then(|from| from.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let has_username = item
        .get("username")
        .and_then(Value::as_str)
        .is_some_and(|u| !u.trim().is_empty());

    let mut record = SourceRecord::from(item).with("platform", platform.as_str());
    if let (false, Some(name)) = (has_username, from_name) {
        record.insert("author", name);
    }
    record
}
