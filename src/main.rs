use anyhow::Result;
use std::path::Path;
use tracing::info;

use comment_veracity::analysis::Scorer;
use comment_veracity::cli::{self, InputMode};
use comment_veracity::config::AppConfig;
use comment_veracity::report::{self, ReportMeta, ResultExporter, Summary};
use comment_veracity::sources::{self, Fetcher};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comment_veracity=info".into()),
        )
        .init();

    info!("Loading configuration...");
    let config = AppConfig::load()?;

    let request = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        cli::prompt_request(&mut input, &mut output, config.fetch.max_results)?
    };

    let (platform, comments) = match request.mode {
        InputMode::Csv => sources::collect_from_csv(Path::new(&request.source)),
        _ => {
            let fetcher = Fetcher::new(&config.fetch)?;
            sources::collect_from_url(
                &request.source,
                &fetcher,
                &config.credentials,
                request.max_results,
            )
            .await
        }
    };

    if comments.is_empty() {
        anyhow::bail!("No comments collected. Please check your input or API keys and try again.");
    }

    info!("Collected {} comments. Analyzing...", comments.len());
    let scorer: Scorer = Scorer::default();
    let results = report::sort_by_score(scorer.score_all(&comments));
    let summary = Summary::from_results(&results);
    info!(
        "Total: {}, likely real: {}, likely fake: {}",
        summary.total, summary.likely_real, summary.likely_fake
    );

    let meta = ReportMeta::new(request.source.as_str(), platform);
    report::write_report(&config.report.output, &meta, &summary, &results).await?;

    if let Some(exporter) = ResultExporter::from_config(&config.report) {
        exporter.write(&results).await?;
    }

    println!(
        "Analysis complete! Report saved to {}",
        config.report.output.display()
    );
    Ok(())
}
