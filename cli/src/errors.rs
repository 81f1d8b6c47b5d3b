use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// returned if the configuration file cannot be read
    #[error("could not read `{path}`: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },
    /// returned if the configuration file is not valid TOML for this tool
    #[error("could not parse `{path}`: {source}")]
    ParseConfig { path: PathBuf, source: toml::de::Error },
    /// returned if the output directory cannot be created
    #[error("could not create the output directory `{path}`: {source}")]
    OutputDir { path: PathBuf, source: io::Error },
    /// returned if the async runtime fails to start
    #[error("could not start the runtime: {0}")]
    Runtime(#[source] io::Error),
    /// wraps a fatal generation failure
    #[error(transparent)]
    Generate(#[from] graphql_typegen::Error),
}
