//! Fixed demo comments used when a live fetch returns nothing.

use crate::analysis::{Comment, Platform};

/// (author, text, publishedAt, likeCount)
type SampleRow = (&'static str, &'static str, &'static str, u64);

static YOUTUBE: &[SampleRow] = &[
    ("User123", "Great video! Loved it.", "2023-01-01", 10),
    ("BotLike456", "Check my channel for free stuff! https://example.com", "2023-01-02", 0),
    ("RealFan", "This changed my perspective.", "2023-01-03", 5),
    ("SpamBot789", "Call now 1234567890 for deals!!!", "2023-01-04", 0),
];

static FACEBOOK: &[SampleRow] = &[
    ("FriendA", "Nice post!", "2023-02-01", 15),
    ("PromoBot", "Follow me for more", "2023-02-02", 1),
];

static INSTAGRAM: &[SampleRow] = &[
    ("Follower1", "🔥🔥🔥", "2023-03-01", 20),
    ("FakeUser", "DM for collab", "2023-03-02", 0),
];

static X: &[SampleRow] = &[
    ("TweeterX", "Interesting thread.", "2023-04-01", 8),
    ("BotTweet", "Visit my site: http://spam.com", "2023-04-02", 0),
];

static LINKEDIN: &[SampleRow] = &[
    ("Professional1", "Valuable insights.", "2023-05-01", 12),
    ("NetworkBot", "Connect with me for opportunities.", "2023-05-02", 2),
];

static UNKNOWN: &[SampleRow] = &[("DefaultUser", "Sample comment.", "2023-06-01", 3)];

pub fn sample_comments(platform: Platform) -> Vec<Comment> {
    let rows = match platform {
        Platform::Youtube => YOUTUBE,
        Platform::Facebook => FACEBOOK,
        Platform::Instagram => INSTAGRAM,
        Platform::X => X,
        Platform::Linkedin => LINKEDIN,
        Platform::Unknown => UNKNOWN,
    };
    rows.iter()
        .map(|(author, text, published_at, likes)| {
            Comment::new(*author, *text, *published_at, *likes, platform)
        })
        .collect()
}
