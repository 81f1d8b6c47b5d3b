use crate::{
    config::{RelationshipKind, RelationshipTarget},
    ir::{FieldIr, FieldType},
    names,
};

/// A relationship field together with the import its type expression
/// requires. The entity builder drops the import again when it matches the
/// owning type.
pub(crate) struct ExpandedRelationship {
    pub(crate) field: FieldIr,
    pub(crate) import: String,
}

/// Expands one relationship target into a resolver-backed field on `entity`.
pub(crate) fn expand_target(
    kind: RelationshipKind,
    target: &RelationshipTarget,
    entity: &str,
) -> ExpandedRelationship {
    let target_entity = names::entity_name(target.table());
    let import = names::type_name(&target_entity);
    let name = target.field().to_owned();
    let description = format!("The {name} of {entity}");

    ExpandedRelationship {
        field: FieldIr {
            name,
            description,
            r#type: FieldType::Entity {
                name: target_entity,
                list: matches!(kind, RelationshipKind::OneToMany),
            },
            needs_resolve: true,
        },
        import,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_bare_target_names_the_field_after_the_table_verbatim() {
        let expanded = expand_target(
            RelationshipKind::OneToMany,
            &RelationshipTarget::Bare("post_likes".to_owned()),
            "Post",
        );

        assert_eq!(expanded.field.name, "post_likes");
        assert_eq!(
            expanded.field.r#type,
            FieldType::Entity {
                name: "PostLike".to_owned(),
                list: true,
            }
        );
        assert_eq!(expanded.import, "PostLikeType");
    }

    #[test]
    fn an_explicit_target_keeps_the_configured_field_name() {
        let expanded = expand_target(
            RelationshipKind::OneToOne,
            &RelationshipTarget::Explicit {
                table: "users".to_owned(),
                field: "author".to_owned(),
            },
            "Post",
        );

        assert_eq!(expanded.field.name, "author");
        assert_eq!(
            expanded.field.r#type,
            FieldType::Entity {
                name: "User".to_owned(),
                list: false,
            }
        );
        assert_eq!(expanded.import, "UserType");
        assert_eq!(expanded.field.description, "The author of Post");
    }

    #[test]
    fn relationship_fields_always_need_a_resolver() {
        let expanded = expand_target(
            RelationshipKind::OneToOne,
            &RelationshipTarget::Bare("journal".to_owned()),
            "User",
        );

        assert!(expanded.field.needs_resolve);
    }
}
