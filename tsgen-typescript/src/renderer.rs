//! Entry points for rendering element trees.

use tsgen_codegen::Indent;

use crate::{CodeElement, CodeFile, Result};

/// Render top-level `elements` to TypeScript source.
///
/// Elements are separated by one blank line and the output ends with a
/// newline. Fails without producing output if the tree is malformed.
///
/// ```
/// use tsgen_typescript::{code_gen, ast::Const};
///
/// let code = code_gen(&[Const::new("myConstant", "42").exported().into()]).unwrap();
/// assert_eq!(code, "export const myConstant = 42;\n");
/// ```
pub fn code_gen(elements: &[CodeElement]) -> Result<String> {
    render(elements, 0)
}

/// Render `elements` with every line starting `indent_level` units deep.
pub fn render(elements: &[CodeElement], indent_level: usize) -> Result<String> {
    CodeFile::from_elements(elements.to_vec()).render_at(Indent::TYPESCRIPT, indent_level)
}
