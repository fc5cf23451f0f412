use std::{path::Path, str::FromStr};

use serde::Deserialize;
use tsgen_typescript::{CodeElement, CodeFile, service::ServiceModel};

use crate::{DocumentFile, Error, Format, OutputConfig, parse::parse_document};

/// Root of a tsgen document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Where and how the code is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Service metadata composed into elements ahead of `elements`
    #[serde(default)]
    pub service: Option<ServiceModel>,

    /// Explicit top-level elements
    #[serde(default)]
    pub elements: Vec<CodeElement>,
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_toml_str(s, "tsgen.toml")
    }
}

impl Document {
    /// Open and parse a document, choosing the syntax by extension.
    pub fn open(path: impl AsRef<Path>) -> crate::Result<Self> {
        DocumentFile::open(path).map(DocumentFile::into_document)
    }

    /// Parse a TOML document with a custom filename for error reporting
    pub fn from_toml_str(content: &str, filename: &str) -> crate::Result<Self> {
        parse_document(content, filename, Format::Toml)
    }

    /// Parse a JSON document with a custom filename for error reporting
    pub fn from_json_str(content: &str, filename: &str) -> crate::Result<Self> {
        parse_document(content, filename, Format::Json)
    }

    /// Every top-level element in file order: service-composed ones first.
    pub fn elements(&self) -> Vec<CodeElement> {
        let mut elements = self
            .service
            .as_ref()
            .map(ServiceModel::elements)
            .unwrap_or_default();
        elements.extend(self.elements.iter().cloned());
        elements
    }

    /// The file this document describes, banner included.
    pub fn code_file(&self) -> CodeFile {
        let file = CodeFile::from_elements(self.elements());
        match &self.output.banner {
            Some(banner) => file.banner(banner),
            None => file,
        }
    }

    /// Render with the configured indentation.
    pub fn render(&self) -> tsgen_typescript::Result<String> {
        self.code_file().render_with_indent(self.output.indent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc: Document = "".parse().unwrap();
        assert_eq!(doc, Document::default());
        assert_eq!(doc.render().unwrap(), "");
    }

    #[test]
    fn test_service_elements_come_first() {
        let doc: Document = r#"
[service]
name = "Shop"

[[elements]]
type = "const"
name = "version"
value = "1"
"#
        .parse()
        .unwrap();

        let elements = doc.elements();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0].kind().as_str(), "const");
        assert_eq!(elements[4], doc.elements[0]);
    }

    #[test]
    fn test_render_with_banner_and_indent() {
        let doc: Document = r#"
[output]
indent = 4
banner = "Generated.\nDo not edit."

[[elements]]
type = "function"
name = "ping"
body = ["return 1;"]
"#
        .parse()
        .unwrap();

        assert_eq!(
            doc.render().unwrap(),
            "// Generated.\n// Do not edit.\n\nfunction ping() {\n    return 1;\n}\n"
        );
    }

    #[test]
    fn test_render_with_tabs() {
        let doc: Document = r#"
[output]
tabs = true

[[elements]]
type = "interface"
name = "Point"
properties = { x = "number" }
"#
        .parse()
        .unwrap();

        assert_eq!(doc.render().unwrap(), "interface Point {\n\tx: number;\n}\n");
    }

    #[test]
    fn test_unknown_section() {
        let err = "[outptu]\npath = \"a.ts\"\n".parse::<Document>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
