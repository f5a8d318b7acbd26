use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::fetch::{ensure_success, Fetcher, PAGE_LIMIT};
use super::normalize::SourceRecord;

#[derive(Deserialize)]
struct CommentThreads {
    #[serde(default)]
    items: Vec<Thread>,
}

#[derive(Deserialize)]
struct Thread {
    snippet: ThreadSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Deserialize)]
struct TopLevelComment {
    /// authorDisplayName, textDisplay, publishedAt, likeCount, ...
    snippet: Map<String, Value>,
}

impl Fetcher {
    /// Top-level comments of a video via the Data API `commentThreads` endpoint.
    pub async fn youtube(&self, video_id: &str, api_key: &str, max_results: u32) -> Vec<SourceRecord> {
        if api_key.is_empty() {
            warn!("[YouTube] No API key provided. Try setting YOUTUBE_API_KEY.");
            return Vec::new();
        }

        match self.try_youtube(video_id, api_key, max_results).await {
            Ok(records) => {
                info!("[YouTube] Fetched {} comments", records.len());
                records
            }
            Err(e) => {
                error!("[YouTube] Error fetching comments: {:#}", e);
                Vec::new()
            }
        }
    }

    async fn try_youtube(&self, video_id: &str, api_key: &str, max_results: u32) -> Result<Vec<SourceRecord>> {
        let url = format!("{}/commentThreads", self.youtube_base_url);
        let max = max_results.min(PAGE_LIMIT).to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("textFormat", "plainText"),
                ("maxResults", max.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .context("YouTube API request failed")?;

        let threads: CommentThreads = ensure_success(response, "YouTube")
            .await?
            .json()
            .await
            .context("Failed to parse YouTube response")?;

        Ok(records_from_threads(threads))
    }
}

fn records_from_threads(threads: CommentThreads) -> Vec<SourceRecord> {
    threads
        .items
        .into_iter()
        .map(|thread| {
            SourceRecord::from(thread.snippet.top_level_comment.snippet).with("platform", "youtube")
        })
        .collect()
}
