use serde::{Deserialize, Serialize};
use std::fmt;

use super::verdict::Verdict;

/// Social platform a comment was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Facebook,
    Instagram,
    X,
    Linkedin,
    #[default]
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::X => "x",
            Platform::Linkedin => "linkedin",
            Platform::Unknown => "unknown",
        }
    }

    /// Lenient parse used for source records. Anything unrecognised is `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "youtube" => Platform::Youtube,
            "facebook" => Platform::Facebook,
            "instagram" => Platform::Instagram,
            "x" | "twitter" => Platform::X,
            "linkedin" => Platform::Linkedin,
            _ => Platform::Unknown,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical comment produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub published_at: String,
    pub like_count: u64,
    pub platform: Platform,
}

impl Comment {
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        published_at: impl Into<String>,
        like_count: u64,
        platform: Platform,
    ) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            published_at: published_at.into(),
            like_count,
            platform,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub comment: Comment,
    /// Clamped to 0..=100.
    pub score: u8,
    pub verdict: Verdict,
    /// Reasons of every rule that fired, in evaluation order.
    pub reasons: Vec<String>,
    pub language: String,
}
