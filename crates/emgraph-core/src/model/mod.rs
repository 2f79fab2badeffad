//! Data model shared by templates, staging and the graph backends.

mod class_kind;
mod descriptor;
mod literal;
mod statement;

pub use class_kind::{ClassKind, UnknownClassKind};
pub use descriptor::{RelationKind, RelationshipDescriptor, DANGLING_MARKER};
pub use literal::Literal;
pub use statement::InsertStatement;

/// Render a table or field name, backtick-escaping anything that is not a
/// plain identifier.
pub(crate) fn surql_ident(name: &str) -> String {
    let plain = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if plain {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', ""))
    }
}
