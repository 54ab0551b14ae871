//! Indentation configuration for code generation.

use std::borrow::Cow;

use serde::Deserialize;

/// Indentation style for generated code.
///
/// Deserializes from `"tab"` or `{ spaces = 2 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// The text of one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(width) => Cow::Owned(" ".repeat(usize::from(*width))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }

    /// Indent every non-empty line of `text` by one level.
    pub fn apply(&self, text: &str) -> String {
        let unit = self.unit();
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{unit}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Spaces(0).unit(), "");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_apply_skips_empty_lines() {
        assert_eq!(Indent::TWO_SPACES.apply("a\n\nb"), "  a\n\n  b");
        assert_eq!(Indent::Tab.apply("x int"), "\tx int");
        assert_eq!(Indent::Tab.apply(""), "");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Tab);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Settings {
            indent: Indent,
        }

        let tab: Settings = toml::from_str(r#"indent = "tab""#).unwrap();
        assert_eq!(tab.indent, Indent::Tab);

        let spaces: Settings = toml::from_str("indent = { spaces = 3 }").unwrap();
        assert_eq!(spaces.indent, Indent::Spaces(3));
        assert_eq!(spaces.indent.apply("x"), "   x");
    }
}
