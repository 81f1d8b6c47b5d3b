use pg_schema_export::Column;

use crate::ir::{FieldIr, FieldType, ScalarType};

/// Bookkeeping and credential columns that never become fields, regardless
/// of their data type.
static EXCLUDED_COLUMNS: &[&str] = &["created_at", "updated_at", "password"];

pub(crate) fn is_excluded(column_name: &str) -> bool {
    EXCLUDED_COLUMNS.contains(&column_name)
}

/// Maps one column onto a scalar field of the owning entity.
pub(crate) fn map_column(column: &Column, entity: &str) -> FieldIr {
    let name = column.column_name.clone();
    let description = match column.col_description.as_deref() {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => format!("The {name} of {entity}"),
    };

    FieldIr {
        name,
        description,
        r#type: FieldType::Scalar(scalar_type(&column.data_type)),
        needs_resolve: false,
    }
}

/// The fixed mapping from exported data types onto scalars. Everything
/// outside the recognized tags, timestamps and json columns included, maps
/// onto the string scalar.
fn scalar_type(data_type: &str) -> ScalarType {
    match data_type {
        "integer" => ScalarType::Int,
        "float" => ScalarType::Float,
        "boolean" => ScalarType::Boolean,
        _ => ScalarType::String,
    }
}
