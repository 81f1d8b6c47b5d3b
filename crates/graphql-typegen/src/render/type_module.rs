use std::fmt::{self, Write as _};

use super::js::{self, JsString, TypeExpr};
use crate::{
    ir::{EntityIr, FieldIr},
    names,
};

/// Renders the complete source text of one generated type module.
pub fn render_type_module(entity: &EntityIr) -> String {
    Renderer { entity }.to_string()
}

struct Renderer<'a> {
    entity: &'a EntityIr,
}

impl fmt::Display for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Renderer { entity } = self;
        let type_name = names::type_name(&entity.name);

        f.write_str(HEADER)?;
        f.write_char('\n')?;

        for import in &entity.extra_imports {
            js::write_type_import(f, import)?;
        }

        if !entity.extra_imports.is_empty() {
            f.write_char('\n')?;
        }

        js::write_model_import(f, &entity.name)?;
        f.write_char('\n')?;

        writeln!(f, "let {type_name} = new GraphQLObjectType({{")?;
        writeln!(f, "  name: {},", JsString(&entity.name))?;
        writeln!(f, "  description: {},", JsString(&entity.description))?;
        f.write_str("  fields: () => ({\n")?;

        let mut fields = entity.fields.iter().peekable();

        while let Some(field) = fields.next() {
            write_field(f, field, &entity.name)?;
            f.write_str(if fields.peek().is_some() { ",\n" } else { "\n" })?;
        }

        f.write_str("  })\n});\n")?;
        f.write_char('\n')?;
        writeln!(f, "export default {type_name};")
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &FieldIr, entity: &str) -> fmt::Result {
    writeln!(f, "    {}: {{", field.name)?;
    writeln!(f, "      type: {},", TypeExpr(&field.r#type))?;

    if field.needs_resolve {
        writeln!(f, "      description: {},", JsString(&field.description))?;
        write_resolver(f, &field.name, entity)?;
    } else {
        writeln!(f, "      description: {}", JsString(&field.description))?;
    }

    f.write_str("    }")
}

/// The resolver re-fetches the parent row by id with the relationship
/// eagerly loaded, then projects the related value out of the plain form.
fn write_resolver(f: &mut fmt::Formatter<'_>, field: &str, entity: &str) -> fmt::Result {
    let parent = entity.to_lowercase();

    writeln!(f, "      resolve: ({parent}) => {{")?;
    writeln!(f, "        return {entity}.forge({{id: {parent}.id}})")?;
    writeln!(f, "        .fetch({{withRelated: ['{field}']}})")?;
    writeln!(f, "        .then({parent} => {parent}.toJSON().{field});")?;
    f.write_str("      }\n")
}

// Always the full constructor set, whether or not the module uses them all.
// The generated modules are starting points meant to be edited by hand.
const HEADER: &str = r"import {
  graphql,
  GraphQLInt,
  GraphQLString,
  GraphQLFloat,
  GraphQLBoolean,
  GraphQLList,
  GraphQLObjectType
} from 'graphql';
";
