use tracing::debug;

use super::language::{LanguageDetector, TrigramDetector, UNKNOWN};
use super::rules::{RuleInput, RULES};
use super::types::{AnalysisResult, Comment};
use super::verdict::Verdict;

/// Prior score before any rule fires; slightly optimistic.
pub const BASE_SCORE: i32 = 60;

/// Stateless authenticity scorer. Safe to share between workers.
pub struct Scorer<D = TrigramDetector> {
    detector: D,
}

impl Default for Scorer<TrigramDetector> {
    fn default() -> Self {
        Self::new(TrigramDetector)
    }
}

impl<D: LanguageDetector> Scorer<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn score(&self, comment: &Comment) -> AnalysisResult {
        let text = comment.text.trim();
        let author = comment.author.trim();
        let language = self.language_of(text);

        let input = RuleInput {
            text,
            author,
            like_count: comment.like_count,
            platform: comment.platform,
            language: &language,
        };

        let mut score = BASE_SCORE;
        let mut reasons = Vec::new();
        for rule in RULES.iter().filter(|rule| rule.evaluate(&input)) {
            score += rule.delta;
            if let Some(reason) = rule.reason {
                reasons.push(reason.to_string());
            }
        }

        let score = score.clamp(0, 100) as u8;

        AnalysisResult {
            comment: Comment {
                author: if author.is_empty() {
                    "Unknown".to_string()
                } else {
                    author.to_string()
                },
                text: text.to_string(),
                published_at: comment.published_at.clone(),
                like_count: comment.like_count,
                platform: comment.platform,
            },
            score,
            verdict: Verdict::from_score(score),
            reasons,
            language,
        }
    }

    pub fn score_all(&self, comments: &[Comment]) -> Vec<AnalysisResult> {
        comments.iter().map(|c| self.score(c)).collect()
    }

    fn language_of(&self, text: &str) -> String {
        if text.is_empty() {
            return UNKNOWN.to_string();
        }
        match self.detector.detect(text) {
            Ok(code) => code,
            Err(e) => {
                debug!("Language detection failed, treating as unknown: {:#}", e);
                UNKNOWN.to_string()
            }
        }
    }
}
