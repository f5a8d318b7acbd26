use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::config::ReportConfig;

/// Writes analysis results in a machine-readable format next to the report.
pub struct ResultExporter {
    export_dir: PathBuf,
    format: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    author: &'a str,
    text: &'a str,
    platform: &'static str,
    published_at: &'a str,
    like_count: u64,
    score: u8,
    verdict: &'static str,
    language: &'a str,
    reasons: String,
}

impl ResultExporter {
    pub fn new(export_dir: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        Self {
            export_dir: export_dir.into(),
            format: format.into(),
        }
    }

    /// `None` when no export format is configured.
    pub fn from_config(config: &ReportConfig) -> Option<Self> {
        config
            .export
            .as_deref()
            .map(|format| Self::new(&config.export_dir, format))
    }

    pub async fn write(&self, results: &[AnalysisResult]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .context("Failed to create export directory")?;

        let date_str = Utc::now().format("%Y-%m-%d_%H%M%S").to_string();
        let filename = format!("analysis_{}.{}", date_str, self.format);
        let path = self.export_dir.join(filename);

        let bytes = match self.format.as_str() {
            "jsonl" => to_jsonl(results)?,
            "csv" => to_csv(results)?,
            _ => anyhow::bail!("Unknown export format: {}", self.format),
        };

        write_file(&path, &bytes).await?;
        info!("Exported {} results to {}", results.len(), path.display());
        Ok(path)
    }
}

fn to_jsonl(results: &[AnalysisResult]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for result in results {
        let json = serde_json::to_string(result).context("Failed to serialize result")?;
        out.extend_from_slice(json.as_bytes());
        out.push(b'\n');
    }
    Ok(out)
}

fn to_csv(results: &[AnalysisResult]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for r in results {
        writer
            .serialize(CsvRow {
                author: &r.comment.author,
                text: &r.comment.text,
                platform: r.comment.platform.as_str(),
                published_at: &r.comment.published_at,
                like_count: r.comment.like_count,
                score: r.score,
                verdict: r.verdict.label(),
                language: &r.language,
                reasons: r.reasons.join("; "),
            })
            .context("Failed to write CSV row")?;
    }
    writer.into_inner().context("Failed to flush CSV output")
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.flush().await?;
    Ok(())
}
