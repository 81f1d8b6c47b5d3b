#![cfg_attr(test, allow(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod config;
mod errors;
mod report;

use std::{path::PathBuf, process};

use clap::Parser;
use graphql_typegen::{generate, save_export, DirectorySink, GenerationSummary};
use pg_schema_export::JsonFileSource;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{config::FileConfig, errors::CliError};

/// Generates graphql-js type modules and a query-root schema from a
/// PostgreSQL schema export.
#[derive(Debug, Parser)]
#[command(name = "graphql-typegen", version, about)]
struct Args {
    /// Path to the configuration file (defaults to `typegen.toml`)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Also write the schema export back out as pretty-printed `pg-schema.json`
    #[arg(long)]
    save_export: bool,
    /// Log filter directives, taking precedence over `RUST_LOG`
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() {
    let args = Args::parse();

    let exit_code = match try_main(args) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            report::error(&error);
            1
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<bool, CliError> {
    let filter = {
        let builder = EnvFilter::builder();
        match &args.log_filter {
            Some(directives) => builder.parse_lossy(directives),
            None => builder.from_env_lossy(),
        }
    };

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let file = match &args.config {
        Some(path) => config::load(path)?,
        None => config::load_default()?,
    };

    tracing::debug!(
        "export: {}, output directory: {}",
        file.export.display(),
        file.out_dir.display()
    );

    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    let summary = runtime.block_on(run(&file, args.save_export))?;

    report::summary(&file.out_dir, &summary);

    Ok(summary.is_success())
}

async fn run(file: &FileConfig, save: bool) -> Result<GenerationSummary, CliError> {
    let source = JsonFileSource::new(&file.export);
    let config = file.generator();

    if save {
        let sink = DirectorySink::create(".").await.map_err(|source| CliError::OutputDir {
            path: PathBuf::from("."),
            source,
        })?;

        save_export(&source, &config, &sink).await?;
    }

    let sink = DirectorySink::create(&file.out_dir)
        .await
        .map_err(|source| CliError::OutputDir {
            path: file.out_dir.clone(),
            source,
        })?;

    let summary = generate(&source, &config, &sink).await?;

    Ok(summary)
}
