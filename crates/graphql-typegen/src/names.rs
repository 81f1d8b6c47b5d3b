use inflector::Inflector;

/// Derives the canonical entity name for a raw table name: singular,
/// PascalCase, underscores folded away. `users` becomes `User`, `post_likes`
/// becomes `PostLike`. Already-singular names only get their casing
/// normalized.
pub(crate) fn entity_name(table_name: &str) -> String {
    table_name.to_singular().to_pascal_case()
}

/// The generated graphql-js type name for an entity, which is also its
/// module base name: `User` becomes `UserType`.
pub(crate) fn type_name(entity: &str) -> String {
    format!("{entity}Type")
}

/// The query-root field name for an entity: the entity name with its first
/// character lowercased, `PostLike` becomes `postLike`.
pub(crate) fn query_field_name(entity: &str) -> String {
    let mut chars = entity.chars();

    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_lowercase(), chars.as_str()),
        None => String::new(),
    }
}
