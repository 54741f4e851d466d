use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run. Nothing is recovered internally: the
/// output table is all-or-nothing.
#[derive(Error, Debug)]
pub enum HurdatError {
    #[error("fetch error ({target}): {source}")]
    Fetch {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("line {line}: cannot classify record with leading field {field:?}")]
    UnrecognizedRecord { line: usize, field: String },

    #[error("line {line}: malformed storm header, observation count {value:?}")]
    MalformedHeader { line: usize, value: String },

    #[error("line {line}: observation appears before any storm header")]
    OrphanObservation { line: usize },

    #[error("line {line}: malformed date/time {value:?}")]
    MalformedDate { line: usize, value: String },

    #[error("line {line}: date {value:?} does not exist")]
    InvalidDate { line: usize, value: String },

    #[error("line {line}: malformed coordinate {value:?}")]
    MalformedCoordinate { line: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("writing {}: {message}", path.display())]
    Sink { path: PathBuf, message: String },
}

impl HurdatError {
    pub(crate) fn fetch<E>(target: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        HurdatError::Fetch {
            target: target.into(),
            source: Box::new(err),
        }
    }

    pub(crate) fn sink(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        HurdatError::Sink {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations
pub type HurdatResult<T> = Result<T, HurdatError>;
