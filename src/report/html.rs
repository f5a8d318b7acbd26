use anyhow::{Context, Result};
use askama::Template;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::info;

use super::chart;
use super::summary::Summary;
use crate::analysis::{AnalysisResult, Platform};

/// Where the analysed comments came from.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub source: String,
    pub platform: Platform,
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    pub fn new(source: impl Into<String>, platform: Platform) -> Self {
        Self {
            source: source.into(),
            platform,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    generated_at: String,
    source: &'a str,
    platform: &'static str,
    chart_svg: String,
    total: usize,
    likely_real: usize,
    likely_fake: usize,
    items: Vec<ItemView>,
}

struct ItemView {
    title: String,
    verdict_class: &'static str,
    text: String,
    reasons: Vec<String>,
}

/// `results` are rendered in the order given; callers pass them sorted.
pub fn render_report(meta: &ReportMeta, summary: &Summary, results: &[AnalysisResult]) -> Result<String> {
    let items = results
        .iter()
        .enumerate()
        .map(|(i, r)| ItemView {
            title: format!(
                "{}. [{}] {} — {} (score {})",
                i + 1,
                r.comment.platform,
                r.comment.author,
                r.verdict.label().to_uppercase(),
                r.score
            ),
            verdict_class: r.verdict.label(),
            text: r.comment.text.clone(),
            reasons: r.reasons.clone(),
        })
        .collect();

    let template = ReportTemplate {
        generated_at: meta.generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        source: &meta.source,
        platform: meta.platform.as_str(),
        chart_svg: chart::render_svg(&summary.histogram()),
        total: summary.total,
        likely_real: summary.likely_real,
        likely_fake: summary.likely_fake,
        items,
    };

    template.render().context("Failed to render report template")
}

pub async fn write_report(
    path: &Path,
    meta: &ReportMeta,
    summary: &Summary,
    results: &[AnalysisResult],
) -> Result<()> {
    let html = render_report(meta, summary, results)?;
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("[Report] Saved to {}", path.display());
    Ok(())
}
