// src/pipeline.rs

use crate::config::PipelineConfig;
use crate::error::HurdatResult;
use crate::fetch::acquire_source;
use crate::process::{build_storm_table, flags::Category, observation::Observation};
use crate::sink::write_table;
use reqwest::Client;
use std::{collections::BTreeSet, path::PathBuf, time::Instant};
use tracing::{info, instrument};

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub cache_hit: bool,
    pub storms: usize,
    pub observations: usize,
    pub count_mismatches: usize,
    /// Storms with at least one observation at hurricane strength.
    pub hurricanes: usize,
    pub output_path: PathBuf,
}

fn count_hurricanes(observations: &[Observation]) -> usize {
    observations
        .iter()
        .filter(|o| {
            o.max_wind
                .and_then(Category::from_wind)
                .is_some_and(|c| c.is_hurricane())
        })
        .map(|o| o.identifier.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Acquire, classify, propagate, normalize and write, in that order. The
/// first failure aborts the run.
pub async fn run(config: &PipelineConfig) -> HurdatResult<RunSummary> {
    run_with_client(&Client::new(), config).await
}

#[instrument(level = "info", skip_all, fields(output = %config.output_path.display()))]
pub async fn run_with_client(client: &Client, config: &PipelineConfig) -> HurdatResult<RunSummary> {
    let start = Instant::now();

    let source = acquire_source(client, config).await?;
    let table = build_storm_table(&source.records)?;
    write_table(&config.output_path, config.output_format, &table.observations)?;

    let summary = RunSummary {
        cache_hit: source.cache_hit,
        storms: table.storms,
        observations: table.observations.len(),
        count_mismatches: table.count_mismatches,
        hurricanes: count_hurricanes(&table.observations),
        output_path: config.output_path.clone(),
    };
    info!(elapsed = ?start.elapsed(), "pipeline complete");
    Ok(summary)
}
