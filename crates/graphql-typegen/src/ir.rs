use indexmap::IndexSet;

/// The normalized description of one generated object type, derived from one
/// table plus its relationship configuration. Built fresh each run and never
/// mutated after construction; only its rendered text form is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityIr {
    /// Singular PascalCase entity name, e.g. `PostLike` for `post_likes`.
    pub name: String,
    /// The table comment, or a synthesized default.
    pub description: String,
    /// Scalar fields in column order, followed by relationship fields in
    /// configuration order.
    pub fields: Vec<FieldIr>,
    /// Type names of other entities this entity's module imports, in
    /// first-use order. Self-references are never recorded.
    pub extra_imports: IndexSet<String>,
}

/// One field of a generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIr {
    pub name: String,
    pub description: String,
    pub r#type: FieldType,
    /// Relationship fields render with a resolver body; plain column fields
    /// do not.
    pub needs_resolve: bool,
}

/// The type expression of a generated field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// A reference to another generated entity type, wrapped in a list for
    /// one-to-many relationships.
    Entity { name: String, list: bool },
}

/// The closed set of scalar constructors columns are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Int,
    Float,
    Boolean,
    String,
}

impl ScalarType {
    /// The graphql-js constructor identifier for this scalar.
    pub fn constructor(self) -> &'static str {
        match self {
            ScalarType::Int => "GraphQLInt",
            ScalarType::Float => "GraphQLFloat",
            ScalarType::Boolean => "GraphQLBoolean",
            ScalarType::String => "GraphQLString",
        }
    }
}
