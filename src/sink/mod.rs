// src/sink/mod.rs
pub mod csv_writer;
pub mod parquet_writer;

use crate::config::OutputFormat;
use crate::error::{HurdatError, HurdatResult};
use crate::process::observation::Observation;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

/// `dir/name` -> `dir/.name.tmp`, the staging file for an atomic replace.
pub(crate) fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".into());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write the whole table to `path`, replacing whatever is there.
///
/// The table goes to a temporary sibling first and is renamed over `path`
/// once complete, so a failed run never leaves a partial table behind.
#[instrument(level = "info", skip(observations), fields(path = %path.display(), rows = observations.len()))]
pub fn write_table(
    path: &Path,
    format: OutputFormat,
    observations: &[Observation],
) -> HurdatResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| HurdatError::sink(parent, e))?;
    }

    let tmp_path = tmp_sibling(path);
    let written = write_staged(&tmp_path, format, observations)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(|e| HurdatError::sink(path, e)));
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written?;

    info!(format = ?format, "wrote table");
    Ok(())
}

fn write_staged(
    tmp_path: &Path,
    format: OutputFormat,
    observations: &[Observation],
) -> HurdatResult<()> {
    let file = File::create(tmp_path).map_err(|e| HurdatError::sink(tmp_path, e))?;

    match format {
        OutputFormat::Csv => {
            let mut out = BufWriter::new(file);
            csv_writer::write_csv(&mut out, observations)?;
            out.flush().map_err(|e| HurdatError::sink(tmp_path, e))?;
        }
        OutputFormat::Parquet => {
            parquet_writer::write_parquet(file, observations)
                .map_err(|e| HurdatError::sink(tmp_path, format!("{:#}", e)))?;
        }
    }
    Ok(())
}
