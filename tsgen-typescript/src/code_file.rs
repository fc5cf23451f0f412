//! CodeFile abstraction for structured TypeScript file generation.

use tracing::debug;
use tsgen_codegen::{CodeBuilder, CodeFragment, Indent};

use crate::{CodeElement, Result};

/// A generated TypeScript file: an optional banner comment followed by
/// top-level elements.
///
/// Elements are separated by exactly one blank line and the output ends with
/// a newline. The whole tree is validated before any text is produced.
///
/// # Example
///
/// ```
/// use tsgen_typescript::{CodeFile, ast::{Const, TypeAlias}};
///
/// let code = CodeFile::new()
///     .banner("Generated by tsgen. Do not edit.")
///     .add(TypeAlias::new("Id", "string").exported())
///     .add(Const::new("DEFAULT_ID", "\"0\"").exported())
///     .render()
///     .unwrap();
///
/// assert_eq!(
///     code,
///     "// Generated by tsgen. Do not edit.\n\nexport type Id = string;\n\nexport const DEFAULT_ID = \"0\";\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    banner: Option<String>,
    elements: Vec<CodeElement>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CodeFile over existing elements.
    pub fn from_elements(elements: Vec<CodeElement>) -> Self {
        Self {
            banner: None,
            elements,
        }
    }

    /// Emit `text` as `//` comment lines before the first element.
    pub fn banner(mut self, text: impl Into<String>) -> Self {
        self.banner = Some(text.into());
        self
    }

    /// Add a top-level element.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, element: impl Into<CodeElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn elements(&self) -> &[CodeElement] {
        &self.elements
    }

    /// Check the whole tree without rendering it.
    pub fn validate(&self) -> Result<()> {
        for (i, element) in self.elements.iter().enumerate() {
            element.validate(&format!("elements[{i}]"))?;
        }
        Ok(())
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> Result<String> {
        self.render_at(Indent::TYPESCRIPT, 0)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> Result<String> {
        self.render_at(indent, 0)
    }

    /// Render with every line starting `level` indent units deep.
    pub fn render_at(&self, indent: Indent, level: usize) -> Result<String> {
        self.validate()?;
        debug!(elements = self.elements.len(), level, "rendering code elements");

        let mut builder = CodeBuilder::at_level(indent, level);

        if let Some(banner) = &self.banner {
            banner
                .lines()
                .for_each(|line| builder.apply_fragment(CodeFragment::comment(line)));
        }

        for element in &self.elements {
            builder.push_separator();
            builder.emit(element);
        }

        let code = builder.build();
        debug!(bytes = code.len(), "rendered code elements");
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Const, ForOf};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.elements().is_empty());
        assert_eq!(file.render().unwrap(), "");
    }

    #[test]
    fn test_banner_only() {
        let code = CodeFile::new().banner("line one\nline two").render().unwrap();
        assert_eq!(code, "// line one\n// line two\n");
    }

    #[test]
    fn test_blank_lines_between_elements() {
        let code = CodeFile::new()
            .add(Const::new("a", "1"))
            .add(Const::new("b", "2"))
            .render()
            .unwrap();
        assert_eq!(code, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_loop_then_const_single_blank() {
        let code = CodeFile::new()
            .add(ForOf::new("x", "xs").statement("use(x);"))
            .add(Const::new("done", "true"))
            .render()
            .unwrap();
        assert_eq!(
            code,
            "for (const x of xs) {\n  use(x);\n}\n\nconst done = true;\n"
        );
    }

    #[test]
    fn test_render_at_level() {
        let code = CodeFile::new()
            .add(Const::new("inner", "1").exported())
            .render_at(Indent::Spaces(4), 1)
            .unwrap();
        assert_eq!(code, "    export const inner = 1;\n");
    }

    #[test]
    fn test_invalid_tree_produces_no_output() {
        let result = CodeFile::new()
            .add(Const::new("ok", "1"))
            .add(Const::new("", "2"))
            .render();
        let err = result.unwrap_err();
        assert_eq!(err.path(), "elements[1]");
    }
}
