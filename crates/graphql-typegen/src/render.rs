//! Rendering of the IR into graphql-js source text.

mod js;
mod query_root;
mod type_module;

pub use query_root::render_query_root;
pub use type_module::render_type_module;
