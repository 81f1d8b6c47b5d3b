use std::fmt::{self, Write as _};

use super::js;
use crate::names;

/// Renders the aggregate schema module: one by-id query field per entity,
/// wrapped in the root query type and the schema export.
pub fn render_query_root(entities: &[String]) -> String {
    Renderer { entities }.to_string()
}

struct Renderer<'a> {
    entities: &'a [String],
}

impl fmt::Display for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Renderer { entities } = self;

        f.write_str(HEADER)?;

        for entity in *entities {
            f.write_char('\n')?;
            js::write_type_import(f, &names::type_name(entity))?;
            js::write_model_import(f, entity)?;
        }

        f.write_char('\n')?;
        f.write_str("let queryType = new GraphQLObjectType({\n")?;
        f.write_str("  name: 'Query',\n")?;
        f.write_str("  fields: () => ({\n")?;

        let mut entities = entities.iter().peekable();

        while let Some(entity) = entities.next() {
            write_query_field(f, entity)?;
            f.write_str(if entities.peek().is_some() { ",\n" } else { "\n" })?;
        }

        f.write_str("  })\n});\n")?;
        f.write_char('\n')?;
        f.write_str("export default new GraphQLSchema({\n  query: queryType\n});\n")
    }
}

fn write_query_field(f: &mut fmt::Formatter<'_>, entity: &str) -> fmt::Result {
    let field = names::query_field_name(entity);

    writeln!(f, "    {field}: {{")?;
    writeln!(f, "      type: {},", names::type_name(entity))?;
    f.write_str("      args: {\n")?;
    f.write_str("        id: {\n")?;
    f.write_str("          name: 'id',\n")?;
    f.write_str("          type: new GraphQLNonNull(GraphQLInt)\n")?;
    f.write_str("        }\n")?;
    f.write_str("      },\n")?;
    f.write_str("      resolve: (root, {id}) => {\n")?;
    writeln!(f, "        return new {entity}({{id}})")?;
    f.write_str("        .fetch()\n")?;
    writeln!(f, "        .then({field} => {field}.toJSON());")?;
    f.write_str("      }\n")?;
    f.write_str("    }")
}

const HEADER: &str = r"import {
  GraphQLObjectType,
  GraphQLInt,
  GraphQLNonNull,
  GraphQLSchema
} from 'graphql';
";

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn renders_one_query_field_per_entity() {
        let rendered = render_query_root(&["User".to_owned(), "Post".to_owned()]);

        let expected = expect![[r#"
            import {
              GraphQLObjectType,
              GraphQLInt,
              GraphQLNonNull,
              GraphQLSchema
            } from 'graphql';

            import UserType from './UserType.js';
            import User from '../../app/models/User.js';

            import PostType from './PostType.js';
            import Post from '../../app/models/Post.js';

            let queryType = new GraphQLObjectType({
              name: 'Query',
              fields: () => ({
                user: {
                  type: UserType,
                  args: {
                    id: {
                      name: 'id',
                      type: new GraphQLNonNull(GraphQLInt)
                    }
                  },
                  resolve: (root, {id}) => {
                    return new User({id})
                    .fetch()
                    .then(user => user.toJSON());
                  }
                },
                post: {
                  type: PostType,
                  args: {
                    id: {
                      name: 'id',
                      type: new GraphQLNonNull(GraphQLInt)
                    }
                  },
                  resolve: (root, {id}) => {
                    return new Post({id})
                    .fetch()
                    .then(post => post.toJSON());
                  }
                }
              })
            });

            export default new GraphQLSchema({
              query: queryType
            });
        "#]];

        expected.assert_eq(&rendered);
    }

    #[test]
    fn multiword_entities_keep_their_inner_capitals_in_field_names() {
        let rendered = render_query_root(&["PostLike".to_owned()]);

        assert!(rendered.contains("    postLike: {"));
        assert!(rendered.contains("        return new PostLike({id})"));
        assert!(rendered.contains("        .then(postLike => postLike.toJSON());"));
    }

    #[test]
    fn an_empty_run_still_renders_a_valid_schema_module() {
        let rendered = render_query_root(&[]);

        let expected = expect![[r#"
            import {
              GraphQLObjectType,
              GraphQLInt,
              GraphQLNonNull,
              GraphQLSchema
            } from 'graphql';

            let queryType = new GraphQLObjectType({
              name: 'Query',
              fields: () => ({
              })
            });

            export default new GraphQLSchema({
              query: queryType
            });
        "#]];

        expected.assert_eq(&rendered);
    }
}
