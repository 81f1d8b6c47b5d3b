use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Everything a generation run needs besides the schema export itself.
///
/// Deserialized from the `typegen.toml` the CLI reads; the default value is
/// a run over the `public` schema with no relationships and no skipped
/// tables. There is no process-wide configuration state: a value of this
/// type is passed explicitly into [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// The database schema (namespace) the export is requested for.
    pub schema: String,
    /// Relationship declarations, keyed by source table name.
    pub relationships: IndexMap<String, RelationshipConfig>,
    /// Tables excluded from generation entirely.
    pub skip_tables: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: "public".to_owned(),
            relationships: IndexMap::new(),
            skip_tables: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Rejects relationship entries that cannot produce a valid field,
    /// before any extraction work happens.
    pub fn validate(&self) -> Result<()> {
        for (table, config) in &self.relationships {
            for target in config.values().flatten() {
                let reason = if target.table().is_empty() {
                    "a relationship target has an empty table name"
                } else if target.field().is_empty() {
                    "a relationship target has an empty field name"
                } else {
                    continue;
                };

                return Err(Error::InvalidRelationshipConfig {
                    table: table.clone(),
                    reason: reason.to_owned(),
                });
            }
        }

        Ok(())
    }
}

/// Relationship declarations for one table, keyed by kind. Key order is
/// declaration order and fixes the order of the generated relationship
/// fields.
pub type RelationshipConfig = IndexMap<RelationshipKind, Vec<RelationshipTarget>>;

/// The cardinality of a declared relationship. The configuration spelling is
/// the camelCase form: `oneToOne`, `oneToMany`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
}

/// One relationship target: either just a table name, with the generated
/// field named after the table verbatim, or a table plus an explicit field
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipTarget {
    Bare(String),
    Explicit { table: String, field: String },
}

impl RelationshipTarget {
    /// The target table name.
    pub fn table(&self) -> &str {
        match self {
            RelationshipTarget::Bare(table) | RelationshipTarget::Explicit { table, .. } => table,
        }
    }

    /// The name of the generated field.
    pub fn field(&self) -> &str {
        match self {
            RelationshipTarget::Bare(table) => table,
            RelationshipTarget::Explicit { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_bare_and_explicit_targets() {
        let config: GeneratorConfig = toml::from_str(indoc! {r#"
            schema = "public"
            skip_tables = ["knex_migrations"]

            [relationships.users]
            oneToMany = ["notifications", "posts"]

            [relationships.posts]
            oneToMany = [{ table = "post_likes", field = "likes" }, "comments"]
            oneToOne = ["journal", { table = "users", field = "author" }]
        "#})
        .unwrap();

        assert_eq!(config.schema, "public");
        assert_eq!(config.skip_tables, ["knex_migrations"]);

        let users = &config.relationships["users"];
        assert_eq!(
            users[&RelationshipKind::OneToMany],
            [
                RelationshipTarget::Bare("notifications".to_owned()),
                RelationshipTarget::Bare("posts".to_owned()),
            ]
        );

        let posts = &config.relationships["posts"];
        assert_eq!(
            posts[&RelationshipKind::OneToOne][1],
            RelationshipTarget::Explicit {
                table: "users".to_owned(),
                field: "author".to_owned(),
            }
        );
    }

    #[test]
    fn relationship_kinds_keep_their_declaration_order() {
        let many_first: GeneratorConfig = toml::from_str(indoc! {r#"
            [relationships.posts]
            oneToMany = ["comments"]
            oneToOne = ["journal"]
        "#})
        .unwrap();

        let kinds: Vec<_> = many_first.relationships["posts"].keys().copied().collect();
        assert_eq!(kinds, [RelationshipKind::OneToMany, RelationshipKind::OneToOne]);

        let one_first: GeneratorConfig = toml::from_str(indoc! {r#"
            [relationships.posts]
            oneToOne = ["journal"]
            oneToMany = ["comments"]
        "#})
        .unwrap();

        let kinds: Vec<_> = one_first.relationships["posts"].keys().copied().collect();
        assert_eq!(kinds, [RelationshipKind::OneToOne, RelationshipKind::OneToMany]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = toml::from_str::<GeneratorConfig>("skip = [\"users\"]").unwrap_err();

        assert!(error.to_string().contains("skip"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: GeneratorConfig = toml::from_str("").unwrap();

        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.schema, "public");
    }

    #[test]
    fn targets_resolve_table_and_field() {
        let bare = RelationshipTarget::Bare("post_likes".to_owned());
        assert_eq!(bare.table(), "post_likes");
        assert_eq!(bare.field(), "post_likes");

        let explicit = RelationshipTarget::Explicit {
            table: "post_likes".to_owned(),
            field: "likes".to_owned(),
        };
        assert_eq!(explicit.table(), "post_likes");
        assert_eq!(explicit.field(), "likes");
    }

    #[test]
    fn validation_rejects_empty_targets() {
        let mut config = GeneratorConfig::default();
        config.relationships.insert(
            "posts".to_owned(),
            [(
                RelationshipKind::OneToOne,
                vec![RelationshipTarget::Explicit {
                    table: "users".to_owned(),
                    field: String::new(),
                }],
            )]
            .into_iter()
            .collect(),
        );

        let error = config.validate().unwrap_err();

        assert!(matches!(
            &error,
            Error::InvalidRelationshipConfig { table, .. } if table == "posts"
        ));
        assert!(error.to_string().contains("empty field name"));
    }

    #[test]
    fn validation_accepts_a_well_formed_config() {
        let config: GeneratorConfig = toml::from_str(indoc! {r#"
            [relationships.users]
            oneToMany = ["posts"]
        "#})
        .unwrap();

        assert!(config.validate().is_ok());
    }
}
