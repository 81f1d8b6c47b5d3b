use indexmap::IndexSet;
use pg_schema_export::{SchemaExport, Table};
use tracing::info;

use crate::{
    config::{GeneratorConfig, RelationshipConfig},
    ir::EntityIr,
    names,
};

mod fields;
mod relations;

/// Builds the IR for every table of the export that is not skip-listed, in
/// the export's table order.
pub(crate) fn extract(export: &SchemaExport, config: &GeneratorConfig) -> Vec<EntityIr> {
    export
        .tables
        .iter()
        .filter(|(key, _)| !config.skip_tables.iter().any(|skip| skip == *key))
        .map(|(key, table)| build_entity(table, config.relationships.get(key)))
        .collect()
}

/// Assembles one entity: scalar fields from the eligible columns in column
/// order, then relationship fields in configuration order. A missing or
/// empty relationship configuration simply yields no relationship fields.
pub(crate) fn build_entity(table: &Table, relationships: Option<&RelationshipConfig>) -> EntityIr {
    let name = names::entity_name(&table.table_name);
    let own_type = names::type_name(&name);

    info!("generating type: {name}");

    let description = match table.obj_description.as_deref() {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => format!("A {name} object"),
    };

    let mut fields: Vec<_> = table
        .columns
        .iter()
        .filter(|(key, _)| !fields::is_excluded(key))
        .map(|(_, column)| fields::map_column(column, &name))
        .collect();

    let mut extra_imports = IndexSet::new();

    for (kind, targets) in relationships.into_iter().flatten() {
        for target in targets {
            let expanded = relations::expand_target(*kind, target, &name);

            if expanded.import != own_type {
                extra_imports.insert(expanded.import);
            }

            fields.push(expanded.field);
        }
    }

    EntityIr {
        name,
        description,
        fields,
        extra_imports,
    }
}
