use std::path::PathBuf;

use async_trait::async_trait;

use crate::{Error, Result, SchemaExport};

/// The introspection collaborator: anything able to produce a
/// [`SchemaExport`] for a named database schema.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Produces the export for the given schema (namespace) name.
    async fn export_schema(&self, schema: &str) -> Result<SchemaExport>;
}

/// Reads a previously saved export from a JSON file.
///
/// A saved export is already scoped to a single schema, so the schema name
/// passed to [`export_schema`](SchemaSource::export_schema) is not consulted.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SchemaSource for JsonFileSource {
    async fn export_schema(&self, _schema: &str) -> Result<SchemaExport> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}
