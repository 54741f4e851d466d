// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE_URL: &str =
    "https://www.nhc.noaa.gov/data/hurdat/hurdat2-1851-2017-050118.txt";
pub const DEFAULT_CACHE_PATH: &str = "data/hurdat_raw.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/hurdat2_cleaned.csv";

/// Output encoding for the cleaned table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Parquet,
}

/// Where the pipeline reads from and writes to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub source_url: String,
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
    pub output_format: OutputFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_format: OutputFormat::Csv,
        }
    }
}

impl PipelineConfig {
    /// Parse a YAML document; missing keys fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("parsing pipeline config YAML")
    }
}
