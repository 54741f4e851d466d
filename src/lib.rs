//! Download, parse and normalize the HURDAT2 hurricane-track dataset into one
//! row per storm observation.

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod process;
pub mod sink;

pub use config::{OutputFormat, PipelineConfig};
pub use error::{HurdatError, HurdatResult};
pub use pipeline::{run, RunSummary};
