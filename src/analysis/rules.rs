//! Heuristic rules that adjust a comment's authenticity score.
//!
//! Each rule is an independent predicate with a fixed score delta and an
//! optional reason. Rules are evaluated in table order, which only affects the
//! order of reasons; the deltas are summed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::language::UNKNOWN;
use super::types::Platform;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://|www\.").unwrap());
static LONG_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{7,}\b").unwrap());
static PUNCTUATION_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?.]{3,}").unwrap());
static SELF_PROMO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)follow me|check my profile|subscribe|dm for|contact me|visit my").unwrap()
});
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static GENERIC_AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)user\d{2,}").unwrap());
static PROMO_AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)bot|spam|free|promo").unwrap());

const GENERIC_PRAISE: &[&str] = &["nice", "good", "great", "👍", "🔥"];

/// Trimmed view of a comment plus its detected language.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub text: &'a str,
    pub author: &'a str,
    pub like_count: u64,
    pub platform: Platform,
    pub language: &'a str,
}

pub struct Rule {
    pub name: &'static str,
    pub delta: i32,
    pub reason: Option<&'static str>,
    pub applies: fn(&RuleInput<'_>) -> bool,
}

impl Rule {
    pub fn evaluate(&self, input: &RuleInput<'_>) -> bool {
        (self.applies)(input)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("delta", &self.delta)
            .field("reason", &self.reason)
            .finish()
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "url",
        delta: -35,
        reason: Some("Contains a URL or web link"),
        applies: |c| URL.is_match(c.text),
    },
    Rule {
        name: "long_number",
        delta: -10,
        reason: Some("Contains a long numeric sequence"),
        applies: |c| LONG_DIGITS.is_match(c.text),
    },
    Rule {
        name: "noisy_text",
        delta: -8,
        reason: Some("Excessive punctuation or repeated characters"),
        applies: |c| PUNCTUATION_RUN.is_match(c.text) || longest_char_run(c.text) >= 7,
    },
    Rule {
        name: "emoji_density",
        delta: -6,
        reason: Some("High emoji density"),
        applies: |c| c.text.chars().filter(|ch| is_emoji(*ch)).count() >= 4,
    },
    Rule {
        name: "generic_praise",
        delta: -12,
        reason: Some("Very short or generic praise"),
        applies: |c| {
            c.text.chars().count() <= 4 || GENERIC_PRAISE.contains(&c.text.to_lowercase().as_str())
        },
    },
    Rule {
        name: "self_promotion",
        delta: -30,
        reason: Some("Self-promotional call-to-action"),
        applies: |c| SELF_PROMO.is_match(c.text),
    },
    Rule {
        name: "no_likes",
        delta: -4,
        reason: None,
        applies: |c| c.like_count == 0,
    },
    Rule {
        name: "high_likes",
        delta: 10,
        reason: Some("High likes — social traction suggests authenticity"),
        applies: |c| c.like_count >= 25,
    },
    Rule {
        name: "generic_author",
        delta: -10,
        reason: Some("Author name contains many digits / generic pattern"),
        applies: |c| {
            !c.author.is_empty()
                && (DECIMAL_DIGIT.find_iter(c.author).count() >= 3
                    || GENERIC_AUTHOR.is_match(c.author))
        },
    },
    Rule {
        name: "short_author",
        delta: -6,
        reason: Some("Suspiciously short username"),
        applies: |c| {
            !c.author.is_empty()
                && c.author.chars().count() <= 2
                && c.author.chars().all(char::is_alphabetic)
        },
    },
    Rule {
        name: "promo_author",
        delta: -20,
        reason: Some("Username contains bot/promo keywords"),
        applies: |c| !c.author.is_empty() && PROMO_AUTHOR.is_match(c.author),
    },
    Rule {
        name: "undetected_language",
        delta: 0,
        reason: Some("Language could not be reliably detected"),
        applies: |c| c.language == UNKNOWN,
    },
    Rule {
        name: "unexpected_language",
        delta: -6,
        reason: Some("Short comment in unexpected language for this post"),
        applies: |c| {
            c.language != UNKNOWN
                && matches!(c.platform, Platform::Facebook | Platform::Instagram)
                && c.language != "en"
                && c.text.chars().count() < 20
        },
    },
];

/// Length of the longest run of one repeated character. Line breaks end a
/// run and never count towards one.
fn longest_char_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in text.chars() {
        if c == '\n' {
            current = 0;
            previous = None;
            continue;
        }
        if Some(c) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1F6FF}' | '\u{1F900}'..='\u{1F9FF}' | '\u{2600}'..='\u{27BF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(text: &'a str, author: &'a str) -> RuleInput<'a> {
        RuleInput {
            text,
            author,
            like_count: 5,
            platform: Platform::Youtube,
            language: "en",
        }
    }

    fn fired(input: &RuleInput<'_>) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|rule| rule.evaluate(input))
            .map(|rule| rule.name)
            .collect()
    }

    fn rule(name: &str) -> &'static Rule {
        RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn neutral_comment_fires_nothing() {
        assert!(fired(&input("A thoughtful reply about the topic", "Jordan")).is_empty());
    }

    #[test]
    fn url_rule_matches_schemes_and_www() {
        let url = rule("url");
        assert!(url.evaluate(&input("see https://example.com", "a b")));
        assert!(url.evaluate(&input("see http://example.com", "a b")));
        assert!(url.evaluate(&input("go to www.example.com", "a b")));
        assert!(!url.evaluate(&input("example dot com", "a b")));
    }

    #[test]
    fn long_number_needs_seven_digits_on_word_boundaries() {
        let digits = rule("long_number");
        assert!(digits.evaluate(&input("Call 1234567 now", "x y")));
        assert!(!digits.evaluate(&input("Call 123456 now", "x y")));
        assert!(!digits.evaluate(&input("id abc1234567", "x y")));
    }

    #[test]
    fn noisy_text_detects_punctuation_and_repeats() {
        let noisy = rule("noisy_text");
        assert!(noisy.evaluate(&input("What?!?", "x y")));
        assert!(noisy.evaluate(&input("wait...", "x y")));
        assert!(noisy.evaluate(&input("soooooooo good", "x y")));
        assert!(!noisy.evaluate(&input("sooooo good!!", "x y")));
        assert!(!noisy.evaluate(&input("Thanks for this video\n\n\n\n\n\n\nreally good", "x y")));
    }

    #[test]
    fn emoji_density_counts_emoji_ranges() {
        let emoji = rule("emoji_density");
        assert!(emoji.evaluate(&input("love it 😀😀😀😀", "x y")));
        assert!(emoji.evaluate(&input("☀☀☀☀ summer", "x y")));
        assert!(!emoji.evaluate(&input("love it 😀😀😀", "x y")));
    }

    #[test]
    fn generic_praise_covers_short_text_and_fixed_tokens() {
        let praise = rule("generic_praise");
        assert!(praise.evaluate(&input("", "x y")));
        assert!(praise.evaluate(&input("wow!", "x y")));
        assert!(praise.evaluate(&input("Great", "x y")));
        assert!(praise.evaluate(&input("🔥", "x y")));
        assert!(!praise.evaluate(&input("Great work", "x y")));
    }

    #[test]
    fn self_promotion_is_case_insensitive() {
        let promo = rule("self_promotion");
        assert!(promo.evaluate(&input("Follow Me for more", "x y")));
        assert!(promo.evaluate(&input("pls SUBSCRIBE", "x y")));
        assert!(promo.evaluate(&input("DM for collab", "x y")));
        assert!(!promo.evaluate(&input("Check my channel", "x y")));
    }

    #[test]
    fn like_rules_are_mutually_exclusive() {
        for likes in [0u64, 1, 24, 25, 1000] {
            let mut c = input("A thoughtful reply", "Jordan");
            c.like_count = likes;
            let names = fired(&c);
            let both = names.contains(&"no_likes") && names.contains(&"high_likes");
            assert!(!both, "likes={likes}");
        }
        let mut c = input("A thoughtful reply", "Jordan");
        c.like_count = 0;
        assert_eq!(fired(&c), vec!["no_likes"]);
        c.like_count = 25;
        assert_eq!(fired(&c), vec!["high_likes"]);
        c.like_count = 24;
        assert!(fired(&c).is_empty());
    }

    #[test]
    fn author_rules() {
        assert!(rule("generic_author").evaluate(&input("hello there", "Anna1987")));
        assert!(rule("generic_author").evaluate(&input("hello there", "user42")));
        assert!(!rule("generic_author").evaluate(&input("hello there", "Anna19")));
        assert!(rule("generic_author").evaluate(&input("hello there", "Ana٣٤٥")));
        assert!(!rule("generic_author").evaluate(&input("hello there", "Ⅻ½½")));
        assert!(rule("short_author").evaluate(&input("hello there", "Al")));
        assert!(!rule("short_author").evaluate(&input("hello there", "A1")));
        assert!(!rule("short_author").evaluate(&input("hello there", "")));
        assert!(rule("promo_author").evaluate(&input("hello there", "FreeStuff")));
        assert!(rule("promo_author").evaluate(&input("hello there", "NetworkBot")));
        assert!(!rule("promo_author").evaluate(&input("hello there", "Roberta")));
    }

    #[test]
    fn unexpected_language_only_on_short_non_english_facebook_or_instagram() {
        let lang = rule("unexpected_language");
        let mut c = input("Gracias amigo", "Jordan");
        c.language = "es";
        assert!(!lang.evaluate(&c));
        c.platform = Platform::Instagram;
        assert!(lang.evaluate(&c));
        c.language = "en";
        assert!(!lang.evaluate(&c));
        c.language = UNKNOWN;
        assert!(!lang.evaluate(&c));
        c.language = "es";
        c.text = "Gracias por este video tan bueno";
        assert!(!lang.evaluate(&c));
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn longest_run_counts_chars_not_bytes() {
        assert_eq!(longest_char_run(""), 0);
        assert_eq!(longest_char_run("abc"), 1);
        assert_eq!(longest_char_run("🔥🔥🔥x"), 3);
        assert_eq!(longest_char_run("a\n\n\n\n\n\n\nb"), 1);
        assert_eq!(longest_char_run("aa\naaa"), 3);
    }
}
