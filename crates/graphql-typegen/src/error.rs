/// Fatal failures of a generation run.
///
/// Individual artifact writes failing is not fatal and is reported through
/// [`GenerationSummary`](crate::GenerationSummary) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The schema source failed; nothing was generated.
    #[error(transparent)]
    Export(#[from] pg_schema_export::Error),
    /// A relationship entry that could not produce a valid field.
    #[error("invalid relationship configuration for table `{table}`: {reason}")]
    InvalidRelationshipConfig { table: String, reason: String },
    /// Re-serializing the export for persistence failed.
    #[error("serializing schema export: {0}")]
    Json(#[from] serde_json::Error),
    /// A mandatory artifact could not be persisted.
    #[error("writing `{artifact}`: {source}")]
    Persist {
        artifact: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
