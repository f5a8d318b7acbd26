pub mod csv_file;
pub mod fetch;
pub mod graph;
pub mod linkedin;
pub mod normalize;
pub mod platform;
pub mod samples;
pub mod x;
pub mod youtube;

use std::path::Path;
use tracing::{info, warn};

use crate::analysis::{Comment, Platform};
use crate::config::Credentials;

pub use csv_file::read_comments_csv;
pub use fetch::Fetcher;
pub use normalize::{normalize, normalize_all, SourceRecord};
pub use samples::sample_comments;

/// Comments from a CSV file. The report platform is taken from the first row.
pub fn collect_from_csv(path: &Path) -> (Platform, Vec<Comment>) {
    let comments = normalize_all(&read_comments_csv(path), Platform::Unknown);
    let platform = comments
        .first()
        .map(|c| c.platform)
        .unwrap_or(Platform::Unknown);
    (platform, comments)
}

/// Fetches comments for a post URL, falling back to demo data when the live
/// fetch produces nothing.
pub async fn collect_from_url(
    url: &str,
    fetcher: &Fetcher,
    credentials: &Credentials,
    max_results: u32,
) -> (Platform, Vec<Comment>) {
    let platform = platform::detect_platform(url);
    let records = fetch_records(platform, url, fetcher, credentials, max_results).await;
    let mut comments = normalize_all(&records, platform);

    if comments.is_empty() {
        info!(
            "[Demo Mode] Loading sample comments for {} since API fetch failed or keys are missing.",
            platform
        );
        comments = sample_comments(platform);
    }

    (platform, comments)
}

async fn fetch_records(
    platform: Platform,
    url: &str,
    fetcher: &Fetcher,
    credentials: &Credentials,
    max_results: u32,
) -> Vec<SourceRecord> {
    match platform {
        Platform::Youtube => {
            let (Some(id), Some(key)) = (
                platform::youtube_video_id(url),
                credentials.youtube_api_key.as_deref(),
            ) else {
                warn!("[YouTube] Invalid video ID or missing API key.");
                return Vec::new();
            };
            info!("[YouTube] Fetching comments via API...");
            fetcher.youtube(&id, key, max_results).await
        }
        Platform::Facebook => {
            let Some(token) = credentials.facebook_access_token.as_deref() else {
                warn!("[Facebook] Missing access token.");
                return Vec::new();
            };
            let Some(id) = platform::last_path_segment(url) else {
                warn!("[Facebook] Could not extract post ID from URL.");
                return Vec::new();
            };
            info!("[Facebook] Fetching comments via API...");
            fetcher.facebook(&id, token, max_results).await
        }
        Platform::Instagram => {
            let Some(token) = credentials.facebook_access_token.as_deref() else {
                warn!("[Instagram] Missing access token.");
                return Vec::new();
            };
            let Some(id) = platform::instagram_media_id(url) else {
                warn!("[Instagram] Could not extract media ID from URL.");
                return Vec::new();
            };
            info!("[Instagram] Fetching comments via API...");
            fetcher.instagram(&id, token, max_results).await
        }
        Platform::X => {
            let Some(token) = credentials.twitter_bearer_token.as_deref() else {
                warn!("[X/Twitter] Missing bearer token.");
                return Vec::new();
            };
            let Some(id) = platform::tweet_id(url) else {
                warn!("[X/Twitter] Could not extract tweet ID from URL.");
                return Vec::new();
            };
            info!("[X/Twitter] Fetching replies via API...");
            fetcher.x(&id, token, max_results).await
        }
        Platform::Linkedin => {
            let Some(token) = credentials.linkedin_access_token.as_deref() else {
                warn!("[LinkedIn] Missing access token.");
                return Vec::new();
            };
            let Some(urn) = platform::last_path_segment(url) else {
                warn!("[LinkedIn] Could not extract URN from URL.");
                return Vec::new();
            };
            fetcher.linkedin(&urn, token, max_results)
        }
        Platform::Unknown => {
            warn!("Unknown platform for URL {}", url);
            Vec::new()
        }
    }
}
