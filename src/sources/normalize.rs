use serde_json::{Map, Value};

use crate::analysis::{Comment, Platform};

pub const AUTHOR_KEYS: &[&str] = &["author", "user", "username", "authorDisplayName"];
pub const TEXT_KEYS: &[&str] = &["text", "comment", "message", "textDisplay"];
pub const PUBLISHED_KEYS: &[&str] = &["publishedAt", "time", "timestamp", "created_time"];
pub const LIKE_KEYS: &[&str] = &["likeCount", "likes", "like_count"];
pub const PLATFORM_KEYS: &[&str] = &["platform"];

/// Whether `key` names a field the normalizer understands, ignoring case.
/// Used to recognise CSV headers.
pub fn is_known_key(key: &str) -> bool {
    [AUTHOR_KEYS, TEXT_KEYS, PUBLISHED_KEYS, LIKE_KEYS, PLATFORM_KEYS]
        .iter()
        .flat_map(|keys| keys.iter())
        .any(|known| known.eq_ignore_ascii_case(key))
}

/// A loosely-shaped record straight from a platform API or a CSV row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord(Map<String, Value>);

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// First alias that holds a usable value. Nulls and blank strings are
    /// treated as absent.
    fn first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| match value {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            })
    }

    fn first_string(&self, keys: &[&str]) -> Option<String> {
        self.first(keys).and_then(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }
}

impl From<Map<String, Value>> for SourceRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Maps one source record onto a canonical comment.
///
/// `default_platform` is used when the record carries no platform of its own.
pub fn normalize(record: &SourceRecord, default_platform: Platform) -> Comment {
    let author = record
        .first_string(AUTHOR_KEYS)
        .unwrap_or_else(|| "Unknown".to_string());
    let text = record.first_string(TEXT_KEYS).unwrap_or_default();
    let published_at = record.first_string(PUBLISHED_KEYS).unwrap_or_default();
    let like_count = record.first(LIKE_KEYS).map(parse_like_count).unwrap_or(0);
    let platform = record
        .first_string(PLATFORM_KEYS)
        .map(|p| Platform::parse(&p))
        .unwrap_or(default_platform);

    Comment {
        author,
        text,
        published_at,
        like_count,
        platform,
    }
}

pub fn normalize_all(records: &[SourceRecord], default_platform: Platform) -> Vec<Comment> {
    records
        .iter()
        .map(|r| normalize(r, default_platform))
        .collect()
}

fn parse_like_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> SourceRecord {
        match value {
            Value::Object(map) => SourceRecord::from(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn canonical_keys_map_directly() {
        let comment = normalize(
            &record(json!({
                "author": "RealFan",
                "text": "This changed my perspective.",
                "publishedAt": "2023-01-03",
                "likeCount": 5,
                "platform": "youtube",
            })),
            Platform::Unknown,
        );
        assert_eq!(
            comment,
            Comment::new("RealFan", "This changed my perspective.", "2023-01-03", 5, Platform::Youtube)
        );
    }

    #[test]
    fn aliases_are_tried_in_order() {
        let comment = normalize(
            &record(json!({
                "user": "",
                "username": "picked",
                "comment": "hi there",
                "likes": "12",
                "time": "yesterday",
            })),
            Platform::Unknown,
        );
        assert_eq!(comment.author, "picked");
        assert_eq!(comment.text, "hi there");
        assert_eq!(comment.like_count, 12);
        assert_eq!(comment.published_at, "yesterday");
    }

    #[test]
    fn null_values_fall_through_to_next_alias() {
        let comment = normalize(
            &record(json!({"author": null, "user": "second", "text": null, "message": "m"})),
            Platform::Unknown,
        );
        assert_eq!(comment.author, "second");
        assert_eq!(comment.text, "m");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let comment = normalize(&SourceRecord::new(), Platform::Unknown);
        assert_eq!(comment, Comment::new("Unknown", "", "", 0, Platform::Unknown));
    }

    #[test]
    fn bad_like_counts_become_zero() {
        for likes in [json!("lots"), json!(-3), json!(2.5), json!([1])] {
            let comment = normalize(&SourceRecord::new().with("likeCount", likes), Platform::X);
            assert_eq!(comment.like_count, 0);
        }
    }

    #[test]
    fn platform_falls_back_to_default() {
        let comment = normalize(&SourceRecord::new().with("text", "x"), Platform::Facebook);
        assert_eq!(comment.platform, Platform::Facebook);
        let comment = normalize(
            &SourceRecord::new().with("platform", "Instagram"),
            Platform::Facebook,
        );
        assert_eq!(comment.platform, Platform::Instagram);
    }

    #[test]
    fn header_keys_are_recognised() {
        assert!(is_known_key("likes"));
        assert!(is_known_key("author"));
        assert!(is_known_key("Author"));
        assert!(is_known_key("PUBLISHEDAT"));
        assert!(!is_known_key("alice"));
    }
}
