use futures::future::join_all;
use pg_schema_export::SchemaSource;
use tracing::{error, info};

use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    extract, names,
    render::{render_query_root, render_type_module},
    sink::ArtifactSink,
};

/// File name of the aggregate query-root artifact.
pub const SCHEMA_ARTIFACT: &str = "schema.js";

/// File name of the raw export written by [`save_export`].
pub const EXPORT_ARTIFACT: &str = "pg-schema.json";

/// Outcome of one generation run.
///
/// A run that reaches the persistence stage always produces a summary, even
/// when some artifacts failed to persist. Only a failing schema source or an
/// invalid configuration abort with an [`Error`] instead.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    /// Names of the entities built from the export, in table order.
    pub entities: Vec<String>,
    /// Artifacts persisted successfully.
    pub written: Vec<String>,
    /// Artifacts that could not be persisted, with the reported reason.
    pub failures: Vec<PersistFailure>,
}

/// One artifact the sink rejected.
#[derive(Debug)]
pub struct PersistFailure {
    pub artifact: String,
    pub reason: std::io::Error,
}

impl GenerationSummary {
    /// True when every artifact of the run was persisted.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, artifact: &str, outcome: std::io::Result<()>) {
        match outcome {
            Ok(()) => self.written.push(artifact.to_owned()),
            Err(reason) => {
                error!("writing {artifact} failed: {reason}");
                self.failures.push(PersistFailure {
                    artifact: artifact.to_owned(),
                    reason,
                });
            }
        }
    }
}

/// Runs the whole pipeline: fetch the export, build the IR, render one type
/// module per entity, persist them all, then render and persist the query
/// root.
///
/// The writes are issued concurrently; each artifact has a distinct name, so
/// they never race on the same file. One artifact failing to persist does
/// not stop its siblings, it is recorded in the summary. The query root is
/// rendered from every extracted entity, including those whose module
/// failed to persist, so a rerun against a recovered sink produces the same
/// schema.
pub async fn generate(
    source: &dyn SchemaSource,
    config: &GeneratorConfig,
    sink: &dyn ArtifactSink,
) -> Result<GenerationSummary> {
    config.validate()?;

    info!(schema = %config.schema, "generating schema export");
    let export = source.export_schema(&config.schema).await?;

    info!("generating types");
    let entities = extract::extract(&export, config);

    let artifacts: Vec<_> = entities
        .iter()
        .map(|entity| {
            let artifact = format!("{}.js", names::type_name(&entity.name));
            (artifact, render_type_module(entity))
        })
        .collect();

    let mut summary = GenerationSummary {
        entities: entities.iter().map(|entity| entity.name.clone()).collect(),
        ..Default::default()
    };

    let outcomes = join_all(artifacts.iter().map(|(artifact, content)| {
        info!("writing {artifact}");
        sink.persist(artifact, content)
    }))
    .await;

    for ((artifact, _), outcome) in artifacts.iter().zip(outcomes) {
        summary.record(artifact, outcome);
    }

    info!("writing {SCHEMA_ARTIFACT}");
    let query_root = render_query_root(&summary.entities);
    let outcome = sink.persist(SCHEMA_ARTIFACT, &query_root).await;
    summary.record(SCHEMA_ARTIFACT, outcome);

    Ok(summary)
}

/// Fetches the schema export and persists it as pretty-printed JSON, for
/// inspection or for diffing between runs.
pub async fn save_export(
    source: &dyn SchemaSource,
    config: &GeneratorConfig,
    sink: &dyn ArtifactSink,
) -> Result<()> {
    info!(schema = %config.schema, "generating schema export");
    let export = source.export_schema(&config.schema).await?;
    let json = serde_json::to_string_pretty(&export)?;

    sink.persist(EXPORT_ARTIFACT, &json)
        .await
        .map_err(|reason| Error::Persist {
            artifact: EXPORT_ARTIFACT.to_owned(),
            source: reason,
        })?;

    info!("wrote {EXPORT_ARTIFACT}");
    Ok(())
}
