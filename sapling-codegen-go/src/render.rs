//! Go-specific rendering utilities.

use sapling_codegen::{CodeBuilder, Indent};

/// Render dependencies as a Go `import` block.
///
/// Returns an empty string when there is nothing to import.
///
/// # Example
///
/// ```
/// use sapling_codegen::Indent;
/// use sapling_codegen_go::render_imports;
///
/// let deps = vec!["time".to_string(), "encoding/json".to_string()];
/// assert_eq!(
///     render_imports(&deps, Indent::Tab),
///     "import (\n\t\"time\"\n\t\"encoding/json\"\n)"
/// );
/// ```
pub fn render_imports(dependencies: &[String], indent: Indent) -> String {
    if dependencies.is_empty() {
        return String::new();
    }

    CodeBuilder::new(indent)
        .block_with_close("import (", ")", |b| {
            b.each(dependencies, |b, dep| b.line(&format!("\"{dep}\"")))
        })
        .build_trimmed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_imports_empty() {
        assert_eq!(render_imports(&[], Indent::Tab), "");
    }

    #[test]
    fn test_render_imports_single() {
        let deps = vec!["time".to_string()];
        assert_eq!(render_imports(&deps, Indent::Tab), "import (\n\t\"time\"\n)");
    }

    #[test]
    fn test_render_imports_keeps_order() {
        let deps = vec!["strings".to_string(), "fmt".to_string()];
        assert_eq!(
            render_imports(&deps, Indent::TWO_SPACES),
            "import (\n  \"strings\"\n  \"fmt\"\n)"
        );
    }
}
