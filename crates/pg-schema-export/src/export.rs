use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One database schema's exported table metadata.
///
/// The maps preserve document order, which follows the ordering of the
/// introspection queries that produced the export. Generation output order
/// derives directly from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaExport {
    /// Tables keyed by table name.
    pub tables: IndexMap<String, Table>,
    /// Sections of the export this tool does not interpret (constraints,
    /// indexes, ...), kept intact so persisting an export loses nothing.
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

/// One exported table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub table_name: String,
    /// The table comment, when one is set in the database.
    pub obj_description: Option<String>,
    /// Columns keyed by column name, in table definition order.
    pub columns: IndexMap<String, Column>,
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

/// One column of an exported table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub column_name: String,
    /// The database type name, e.g. `integer` or `character varying`.
    pub data_type: String,
    /// The column comment, when one is set in the database.
    pub col_description: Option<String>,
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXPORT: &str = indoc! {r#"
        {
          "tables": {
            "users": {
              "table_name": "users",
              "table_schema": "public",
              "obj_description": null,
              "columns": {
                "id": {
                  "column_name": "id",
                  "data_type": "integer",
                  "col_description": null,
                  "ordinal_position": 1
                },
                "name": {
                  "column_name": "name",
                  "data_type": "character varying",
                  "col_description": "The user's display name",
                  "ordinal_position": 2
                }
              }
            },
            "posts": {
              "table_name": "posts",
              "obj_description": "A blog post",
              "columns": {}
            }
          },
          "constraints": {}
        }
    "#};

    #[test]
    fn parses_tables_and_columns_in_document_order() {
        let export: SchemaExport = serde_json::from_str(EXPORT).unwrap();

        let tables: Vec<_> = export.tables.keys().collect();
        assert_eq!(tables, ["users", "posts"]);

        let users = &export.tables["users"];
        assert_eq!(users.table_name, "users");
        assert_eq!(users.obj_description, None);

        let columns: Vec<_> = users.columns.keys().collect();
        assert_eq!(columns, ["id", "name"]);
        assert_eq!(users.columns["id"].data_type, "integer");
        assert_eq!(
            users.columns["name"].col_description.as_deref(),
            Some("The user's display name")
        );

        assert_eq!(export.tables["posts"].obj_description.as_deref(), Some("A blog post"));
    }

    #[test]
    fn keeps_uninterpreted_parts_of_the_export() {
        let export: SchemaExport = serde_json::from_str(EXPORT).unwrap();

        assert!(export.rest.contains_key("constraints"));
        assert!(export.tables["users"].rest.contains_key("table_schema"));
        assert_eq!(
            export.tables["users"].columns["id"].rest["ordinal_position"],
            serde_json::json!(1)
        );
    }

    #[test]
    fn survives_a_serialization_round_trip() {
        let export: SchemaExport = serde_json::from_str(EXPORT).unwrap();
        let reparsed: SchemaExport = serde_json::from_str(&serde_json::to_string(&export).unwrap()).unwrap();

        assert_eq!(export, reparsed);
    }

    #[test]
    fn rejects_an_export_without_tables() {
        let error = serde_json::from_str::<SchemaExport>("{}").unwrap_err();

        assert!(error.to_string().contains("tables"));
    }
}
