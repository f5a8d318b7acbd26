use std::collections::HashMap;

use crate::analysis::{AnalysisResult, Verdict};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub likely_real: usize,
    pub likely_fake: usize,
    pub by_verdict: HashMap<Verdict, usize>,
}

impl Summary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Summary {
            total: results.len(),
            ..Summary::default()
        };
        for result in results {
            *summary.by_verdict.entry(result.verdict).or_insert(0) += 1;
            if result.verdict.is_probably_real() {
                summary.likely_real += 1;
            }
        }
        summary.likely_fake = summary.total - summary.likely_real;
        summary
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.by_verdict.get(&verdict).copied().unwrap_or(0)
    }

    /// Non-empty verdict buckets in display order.
    pub fn histogram(&self) -> Vec<(Verdict, usize)> {
        Verdict::all()
            .iter()
            .filter_map(|verdict| {
                let count = self.count(*verdict);
                if count > 0 {
                    Some((*verdict, count))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Most suspicious first. The sort is stable so equal scores keep their
/// collection order.
pub fn sort_by_score(mut results: Vec<AnalysisResult>) -> Vec<AnalysisResult> {
    results.sort_by_key(|r| r.score);
    results
}
