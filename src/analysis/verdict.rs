use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticity label derived from a comment's score.
///
/// Variants are declared from least to most trustworthy, so the derived
/// ordering matches the verdict rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Fake,
    LikelyFake,
    LikelyReal,
    Real,
}

/// Lower score bounds, checked top-down. The last entry catches everything.
const THRESHOLDS: [(u8, Verdict); 4] = [
    (60, Verdict::Real),
    (40, Verdict::LikelyReal),
    (20, Verdict::LikelyFake),
    (0, Verdict::Fake),
];

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, verdict)| *verdict)
            .unwrap_or(Verdict::Fake)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Fake => "fake",
            Verdict::LikelyFake => "likely-fake",
            Verdict::LikelyReal => "likely-real",
            Verdict::Real => "real",
        }
    }

    /// Real and likely-real both count as "likely real" in the summary.
    pub fn is_probably_real(&self) -> bool {
        matches!(self, Verdict::Real | Verdict::LikelyReal)
    }

    pub fn color(&self) -> &'static str {
        match self {
            Verdict::Real => "#4CAF50",
            Verdict::LikelyReal => "#FFC107",
            Verdict::LikelyFake => "#FF5722",
            Verdict::Fake => "#D81B60",
        }
    }

    /// Display order for histograms and charts.
    pub fn all() -> &'static [Verdict] {
        &[
            Verdict::Real,
            Verdict::LikelyReal,
            Verdict::LikelyFake,
            Verdict::Fake,
        ]
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
