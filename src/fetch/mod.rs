// src/fetch/mod.rs

use crate::config::PipelineConfig;
use crate::error::{HurdatError, HurdatResult};
use crate::process::raw_table::{read_raw_records, write_raw_records, RawRecord};
use crate::sink::tmp_sibling;
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Raw rows plus where they came from.
#[derive(Debug)]
pub struct Acquired {
    pub records: Vec<RawRecord>,
    pub cache_hit: bool,
}

/// Read the cached copy if there is one, otherwise download the dataset and
/// write the cache before returning. Either the cache is read or it is
/// written, never both.
#[instrument(level = "info", skip(client, config), fields(cache = %config.cache_path.display()))]
pub async fn acquire_source(client: &Client, config: &PipelineConfig) -> HurdatResult<Acquired> {
    let cache = config.cache_path.as_path();
    let cache_name = cache.display().to_string();

    let exists = fs::try_exists(cache)
        .await
        .map_err(|e| HurdatError::fetch(&cache_name, e))?;
    if exists {
        let bytes = fs::read(cache)
            .await
            .map_err(|e| HurdatError::fetch(&cache_name, e))?;
        let records = read_raw_records(bytes.as_slice())?;
        info!(rows = records.len(), "read cached source");
        return Ok(Acquired {
            records,
            cache_hit: true,
        });
    }

    let text = download_text(client, &config.source_url).await?;
    let records = read_raw_records(text.as_bytes())?;
    write_cache(cache, &records).await?;
    info!(rows = records.len(), url = %config.source_url, "downloaded source and wrote cache");

    Ok(Acquired {
        records,
        cache_hit: false,
    })
}

/// GET `url_str` and return the body as text.
pub async fn download_text(client: &Client, url_str: &str) -> HurdatResult<String> {
    let url = Url::parse(url_str).map_err(|e| HurdatError::fetch(url_str, e))?;

    let resp = client
        .get(url.as_str())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| HurdatError::fetch(url_str, e))?;
    resp.text().await.map_err(|e| HurdatError::fetch(url_str, e))
}

async fn write_cache(path: &Path, records: &[RawRecord]) -> HurdatResult<()> {
    let name = path.display().to_string();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| HurdatError::fetch(&name, e))?;
    }

    let mut buf = Vec::new();
    write_raw_records(&mut buf, records)?;

    // only a complete cache may appear at `path`, later runs trust it as-is
    let tmp_path = tmp_sibling(path);
    let staged = match fs::write(&tmp_path, &buf).await {
        Ok(()) => fs::rename(&tmp_path, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = staged {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(HurdatError::fetch(&name, e));
    }
    Ok(())
}
