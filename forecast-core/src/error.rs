use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a forecast request.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Please enter a city.")]
    EmptyCity,
}

/// Failures of the history log operations. `Empty` is informational
/// (nothing to save), the rest carry the path and the underlying cause.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("No historical data to save.")]
    Empty,

    #[error("Error saving file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
