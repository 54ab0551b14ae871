//! Line-oriented builder for indented source text.

use super::Indent;

/// Accumulates source lines at a tracked indentation depth.
///
/// The `push_*` methods borrow the builder and suit loops; the consuming
/// methods return it for chaining.
///
/// ```
/// use sapling_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .comment("Pet represents a Pet model.")
///     .block_with_close("type Pet struct {", "}", |b| b.line("Name string"))
///     .build();
///
/// assert_eq!(code, "// Pet represents a Pet model.\ntype Pet struct {\n\tName string\n}\n");
/// ```
///
/// ```
/// use sapling_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
/// builder.push_line("const (").push_indent();
/// for name in ["A", "B"] {
///     builder.push_line(&format!("{name} = \"{name}\""));
/// }
/// builder.push_dedent().push_line(")");
/// assert_eq!(builder.build_trimmed(), "const (\n  A = \"A\"\n  B = \"B\"\n)");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            out: String::new(),
        }
    }

    /// Builder indenting with tabs, as `gofmt` does.
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Append one line at the current depth.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.pad();
        self.out.push_str(line);
        self.out.push('\n');
        self
    }

    /// Append an empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Append a pre-rendered block, each line at the current depth.
    ///
    /// Empty lines stay empty; an empty block appends nothing.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Append `// ` comment lines at the current depth.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(&format!("// {line}"));
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn line(mut self, line: &str) -> Self {
        self.push_line(line);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    /// Append `open`, the lines added by `body` one level deeper, then `close`.
    pub fn block_with_close<F>(mut self, open: &str, close: &str, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.push_line(open).push_indent();
        let mut inner = body(self);
        inner.push_dedent().push_line(close);
        inner
    }

    /// Apply `f` once per item, in iteration order.
    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn build(self) -> String {
        self.out
    }

    /// The built text without its trailing newlines.
    pub fn build_trimmed(self) -> String {
        let mut out = self.out;
        out.truncate(out.trim_end_matches('\n').len());
        out
    }

    fn pad(&mut self) {
        let unit = self.indent.unit();
        for _ in 0..self.depth {
            self.out.push_str(&unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}
