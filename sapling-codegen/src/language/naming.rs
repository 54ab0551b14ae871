//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform model identifiers and field names, and how to
/// keep the results valid identifiers. Every transformation is a pure
/// function of its input.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model identifier to a type name (e.g., "email_verification" -> "EmailVerification")
    pub to_type: fn(&str) -> String,
    /// Transform a field name to a language-specific field name
    pub to_field: fn(&str) -> String,
    /// Transform a type name to a file stem (e.g., "EmailVerification" -> "email_verification")
    pub to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a name that is reserved or not a valid identifier start
    pub escape: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name must be escaped before use as an identifier.
    pub fn needs_escape(&self, name: &str) -> bool {
        self.is_reserved(name) || name.starts_with(|c: char| c.is_ascii_digit())
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.needs_escape(name) {
            (self.escape)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    ///
    /// Returns an empty string when the identifier has no usable characters.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        if transformed.is_empty() {
            return transformed;
        }
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.to_field)(name);
        if transformed.is_empty() {
            return transformed;
        }
        self.safe_name(&transformed)
    }

    /// Transform for use as a file stem.
    pub fn file_name(&self, name: &str) -> String {
        // File names don't need escaping
        (self.to_file)(name)
    }
}
