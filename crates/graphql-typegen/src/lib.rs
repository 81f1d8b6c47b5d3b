//! Generates graphql-js source modules from a PostgreSQL schema export: one
//! object-type module per table, wired to the table's backing Bookshelf
//! model, plus a query-root `schema.js` exposing a by-id lookup per entity.
//!
//! The pipeline is a pure forward transformation: the export and the
//! relationship configuration are normalized into [`EntityIr`] values, which
//! are rendered deterministically into text artifacts and handed to an
//! [`ArtifactSink`].

mod config;
mod error;
mod extract;
mod ir;
mod names;
mod pipeline;
mod render;
mod sink;

pub use config::{GeneratorConfig, RelationshipConfig, RelationshipKind, RelationshipTarget};
pub use error::{Error, Result};
pub use ir::{EntityIr, FieldIr, FieldType, ScalarType};
pub use pipeline::{
    generate, save_export, GenerationSummary, PersistFailure, EXPORT_ARTIFACT, SCHEMA_ARTIFACT,
};
pub use render::{render_query_root, render_type_module};
pub use sink::{ArtifactSink, DirectorySink};
