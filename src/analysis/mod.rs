pub mod language;
pub mod rules;
pub mod scorer;
pub mod types;
pub mod verdict;

pub use language::{LanguageDetector, TrigramDetector};
pub use scorer::Scorer;
pub use types::{AnalysisResult, Comment, Platform};
pub use verdict::Verdict;
