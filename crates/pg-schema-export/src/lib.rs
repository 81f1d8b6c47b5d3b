//! The raw material for type generation: a JSON export of one PostgreSQL
//! schema's table metadata, in the shape produced by the
//! `pg-json-schema-export` tool, plus the [`SchemaSource`] seam through which
//! the generator obtains it.

mod error;
mod export;
mod source;

pub use error::{Error, Result};
pub use export::{Column, SchemaExport, Table};
pub use source::{JsonFileSource, SchemaSource};
