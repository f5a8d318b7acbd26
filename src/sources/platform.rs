//! Recognising platforms and post identifiers from pasted URLs.

use reqwest::Url;

use crate::analysis::Platform;

pub fn detect_platform(url: &str) -> Platform {
    let url = url.to_lowercase();
    if url.contains("youtube.com") || url.contains("youtu.be") {
        Platform::Youtube
    } else if url.contains("instagram.com") {
        Platform::Instagram
    } else if url.contains("facebook.com") {
        Platform::Facebook
    } else if url.contains("x.com") || url.contains("twitter.com") {
        Platform::X
    } else if url.contains("linkedin.com") {
        Platform::Linkedin
    } else {
        Platform::Unknown
    }
}

/// Video id from `youtu.be/<id>` or the `v` query parameter.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let id = if parsed.host_str().is_some_and(|h| h.contains("youtu.be")) {
        parsed.path().trim_matches('/').to_string()
    } else {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?
    };
    non_empty(id)
}

/// Last non-empty path segment, used for Facebook object ids and LinkedIn URNs.
pub fn last_path_segment(url: &str) -> Option<String> {
    path_of(url)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .and_then(|segment| non_empty(segment.to_string()))
}

pub fn instagram_media_id(url: &str) -> Option<String> {
    segment_after(url, "/p/")
}

pub fn tweet_id(url: &str) -> Option<String> {
    segment_after(url, "/status/")
}

fn segment_after(url: &str, marker: &str) -> Option<String> {
    let path = path_of(url);
    let (_, rest) = path.split_once(marker)?;
    rest.split('/')
        .next()
        .and_then(|segment| non_empty(segment.to_string()))
}

/// Strips the query string and fragment.
fn path_of(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
