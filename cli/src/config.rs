use std::{
    io,
    path::{Path, PathBuf},
};

use graphql_typegen::{GeneratorConfig, RelationshipConfig};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::CliError;

pub(crate) const DEFAULT_PATH: &str = "typegen.toml";

/// The `typegen.toml` contents: where to find the schema export, where to
/// write the generated modules, and the generator settings themselves.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    /// Path of the schema export JSON consumed by the run.
    pub(crate) export: PathBuf,
    /// Directory the generated modules are written into.
    pub(crate) out_dir: PathBuf,
    schema: String,
    relationships: IndexMap<String, RelationshipConfig>,
    skip_tables: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            export: PathBuf::from("pg-schema.json"),
            out_dir: PathBuf::from("graphql"),
            schema: "public".to_owned(),
            relationships: IndexMap::new(),
            skip_tables: Vec::new(),
        }
    }
}

impl FileConfig {
    pub(crate) fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            schema: self.schema.clone(),
            relationships: self.relationships.clone(),
            skip_tables: self.skip_tables.clone(),
        }
    }
}

pub(crate) fn load(path: &Path) -> Result<FileConfig, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_owned(),
        source,
    })?;

    parse(path, &raw)
}

/// Loads `typegen.toml` from the working directory, falling back to the
/// default configuration when the file does not exist.
pub(crate) fn load_default() -> Result<FileConfig, CliError> {
    load_or_default(Path::new(DEFAULT_PATH))
}

fn load_or_default(path: &Path) -> Result<FileConfig, CliError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse(path, &raw),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(source) => Err(CliError::ReadConfig {
            path: path.to_owned(),
            source,
        }),
    }
}

fn parse(path: &Path, raw: &str) -> Result<FileConfig, CliError> {
    toml::from_str(raw).map_err(|source| CliError::ParseConfig {
        path: path.to_owned(),
        source,
    })
}
