use std::path::PathBuf;

/// Failures while producing a schema export.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The export file could not be read.
    #[error("reading schema export from `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The export was not JSON of the expected shape.
    #[error("malformed schema export: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
