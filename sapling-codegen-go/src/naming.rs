//! Go-specific naming conventions.

use sapling_codegen::NamingConvention;
use sapling_core::{to_pascal_case, to_snake_case};

fn escape_go_identifier(name: &str) -> String {
    format!("N{}", name)
}

/// Exported field name; names without usable characters become `Field`.
fn to_go_field(name: &str) -> String {
    let pascal = to_pascal_case(name);
    if pascal.is_empty() {
        "Field".to_string()
    } else {
        pascal
    }
}

/// Go naming conventions.
///
/// Types and fields are exported (PascalCase); files are snake_case.
pub const GO_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_field: to_go_field,
    to_file: to_snake_case,
    reserved_words: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    escape: escape_go_identifier,
};
