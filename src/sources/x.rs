use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{error, info, warn};

use super::fetch::{ensure_success, Fetcher, PAGE_LIMIT};
use super::normalize::SourceRecord;

/// Recent search rejects page sizes below 10.
const MIN_PAGE: u32 = 10;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
    includes: Option<Includes>,
}

#[derive(Deserialize)]
struct Tweet {
    text: String,
    author_id: Option<String>,
    created_at: Option<String>,
    public_metrics: Option<PublicMetrics>,
}

#[derive(Deserialize)]
struct PublicMetrics {
    #[serde(default)]
    like_count: u64,
}

#[derive(Deserialize)]
struct Includes {
    #[serde(default)]
    users: Vec<User>,
}

#[derive(Deserialize)]
struct User {
    id: String,
    username: String,
}

impl Fetcher {
    /// Replies in a conversation via the v2 recent-search endpoint.
    /// Needs a bearer token with elevated access.
    pub async fn x(&self, tweet_id: &str, bearer_token: &str, max_results: u32) -> Vec<SourceRecord> {
        if bearer_token.is_empty() {
            warn!("[X/Twitter] No bearer token provided. Try setting TWITTER_BEARER_TOKEN.");
            return Vec::new();
        }

        match self.try_x(tweet_id, bearer_token, max_results).await {
            Ok(records) => {
                info!("[X/Twitter] Fetched {} replies", records.len());
                records
            }
            Err(e) => {
                error!("[X/Twitter] Error fetching replies: {:#}", e);
                Vec::new()
            }
        }
    }

    async fn try_x(&self, tweet_id: &str, bearer_token: &str, max_results: u32) -> Result<Vec<SourceRecord>> {
        let url = format!("{}/tweets/search/recent", self.x_base_url);
        let query = format!("conversation_id:{}", tweet_id);
        let max = max_results.clamp(MIN_PAGE, PAGE_LIMIT).to_string();

        let response = self
            .client
            .get(&url)
            .bearer_auth(bearer_token)
            .query(&[
                ("query", query.as_str()),
                ("max_results", max.as_str()),
                ("tweet.fields", "created_at,public_metrics"),
                ("expansions", "author_id"),
                ("user.fields", "username"),
            ])
            .send()
            .await
            .context("X API request failed")?;

        let search: SearchResponse = ensure_success(response, "X")
            .await?
            .json()
            .await
            .context("Failed to parse X response")?;

        Ok(records_from_search(search))
    }
}

fn records_from_search(search: SearchResponse) -> Vec<SourceRecord> {
    let usernames: HashMap<String, String> = search
        .includes
        .map(|i| i.users)
        .unwrap_or_default()
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();

    search
        .data
        .into_iter()
        .map(|tweet| {
            let author = tweet
                .author_id
                .as_ref()
                .and_then(|id| usernames.get(id))
                .cloned()
                .unwrap_or_default();
            SourceRecord::new()
                .with("author", author)
                .with("text", tweet.text)
                .with("publishedAt", tweet.created_at.unwrap_or_default())
                .with(
                    "likeCount",
                    tweet.public_metrics.map(|m| m.like_count).unwrap_or(0),
                )
                .with("platform", "x")
        })
        .collect()
}
