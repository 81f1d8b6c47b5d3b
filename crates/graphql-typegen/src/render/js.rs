use std::fmt::{self, Write};

use crate::ir::FieldType;

/// A string rendered as a single-quoted JavaScript literal, with the
/// escaping that keeps descriptions from breaking out of the quotes.
pub(super) struct JsString<'a>(pub(super) &'a str);

impl fmt::Display for JsString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\'')?;
        for c in self.0.chars() {
            match c {
                '\r' => f.write_str("\\r"),
                '\n' => f.write_str("\\n"),
                '\t' => f.write_str("\\t"),
                '\\' => f.write_str("\\\\"),
                '\'' => f.write_str("\\'"),
                c if c.is_control() => write!(f, "\\u{:04x}", c as u32),
                c => f.write_char(c),
            }?
        }
        f.write_char('\'')
    }
}

/// The graphql-js expression for a field's type.
pub(super) struct TypeExpr<'a>(pub(super) &'a FieldType);

impl fmt::Display for TypeExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            FieldType::Scalar(scalar) => f.write_str(scalar.constructor()),
            FieldType::Entity { name, list: false } => write!(f, "{name}Type"),
            FieldType::Entity { name, list: true } => write!(f, "new GraphQLList({name}Type)"),
        }
    }
}

/// Import of a sibling generated type module.
pub(super) fn write_type_import(out: &mut impl Write, type_name: &str) -> fmt::Result {
    writeln!(out, "import {type_name} from './{type_name}.js';")
}

/// Import of the bookshelf model backing an entity's resolvers.
pub(super) fn write_model_import(out: &mut impl Write, entity: &str) -> fmt::Result {
    writeln!(out, "import {entity} from '../../app/models/{entity}.js';")
}
