//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe their output as fragments; only [`CodeBuilder`] turns
//! fragments into text, so nodes never deal with indentation directly.
//!
//! [`CodeBuilder`]: crate::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line. Never carries indentation.
    Blank,
    /// A block with header, body fragments indented one level, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `//` line comment.
    Comment(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: impl Into<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Create a line comment fragment.
    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// Whether rendering this fragment leaves the output on a blank line.
    pub fn ends_with_blank(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Sequence(fragments) => ends_with_blank(fragments),
            Self::Block { body, close, .. } => close.is_none() && ends_with_blank(body),
            Self::Line(_) | Self::Comment(_) => false,
        }
    }
}

/// Whether the last fragment of `fragments` ends with a blank line.
///
/// Used to keep exactly one blank line between sibling blocks when a block
/// already emits its own trailing blank.
pub fn ends_with_blank(fragments: &[CodeFragment]) -> bool {
    fragments.last().is_some_and(CodeFragment::ends_with_blank)
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(
            CodeFragment::comment("note"),
            CodeFragment::Comment("note".to_string())
        );
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block("if (ok) {", vec![CodeFragment::line("return 1;")], "}");
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "if (ok) {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }

    #[test]
    fn test_ends_with_blank() {
        assert!(!ends_with_blank(&[]));
        assert!(ends_with_blank(&[CodeFragment::line("a;"), CodeFragment::Blank]));
        assert!(!ends_with_blank(&[CodeFragment::Blank, CodeFragment::line("a;")]));

        let looped = CodeFragment::sequence(vec![
            CodeFragment::block("for (;;) {", vec![], "}"),
            CodeFragment::Blank,
        ]);
        assert!(looped.ends_with_blank());

        let closed = CodeFragment::block("{", vec![CodeFragment::Blank], "}");
        assert!(!closed.ends_with_blank());
    }
}
