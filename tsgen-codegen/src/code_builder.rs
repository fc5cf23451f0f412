//! Code builder utility for generating properly indented code.

use crate::{CodeFragment, Indent, Renderable};

/// Line-oriented output buffer that tracks the current indent level.
///
/// # Example
///
/// ```
/// use tsgen_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "if (ready) {",
///     vec![CodeFragment::line("start();")],
///     "}",
/// ));
/// assert_eq!(builder.build(), "if (ready) {\n  start();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Builder starting at level zero.
    pub fn new(indent: Indent) -> Self {
        Self::at_level(indent, 0)
    }

    /// Builder whose lines all start at least `level` units deep.
    pub fn at_level(indent: Indent, level: usize) -> Self {
        Self {
            indent_level: level,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder using two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Write `s` at the current level, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write an empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a blank line unless the buffer is empty or already ends on one.
    pub fn push_separator(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.ends_with_blank() {
            self.push_blank();
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Never goes below zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write `// text` at the current level.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Write one fragment; block bodies go one level deeper than their header.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Sequence(fragments) => {
                fragments.into_iter().for_each(|f| self.apply_fragment(f));
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Whether the buffer currently ends with a blank line.
    pub fn ends_with_blank(&self) -> bool {
        self.buffer.ends_with("\n\n")
    }

    /// Take the accumulated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let prefix = self.indent.repeat(self.indent_level);
        self.buffer.push_str(&prefix);
    }
}
