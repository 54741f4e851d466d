use anyhow::{Context, Result};
use hurdat::{pipeline, PipelineConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) fixed locations ──────────────────────────────────────────
    let config = PipelineConfig::default();
    info!(
        url = %config.source_url,
        cache = %config.cache_path.display(),
        output = %config.output_path.display(),
        "configured"
    );

    // ─── 3) run ──────────────────────────────────────────────────────
    let summary = pipeline::run(&config)
        .await
        .context("hurdat pipeline failed")?;

    info!(
        cache_hit = summary.cache_hit,
        storms = summary.storms,
        observations = summary.observations,
        hurricanes = summary.hurricanes,
        count_mismatches = summary.count_mismatches,
        output = %summary.output_path.display(),
        "all done"
    );
    Ok(())
}
