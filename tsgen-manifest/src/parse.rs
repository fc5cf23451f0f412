use crate::{Document, Format, OutputConfig, Result, SourceContext};

/// Parse and validate a document.
///
/// Validation covers the `[output]` settings and every required field in
/// the element tree, so a document that parses here renders without error.
pub fn parse_document(content: &str, filename: &str, format: Format) -> Result<Document> {
    let ctx = SourceContext::new(content, filename);
    let document: Document = match format {
        Format::Toml => toml::from_str(content).map_err(|e| ctx.toml_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e))?,
    };
    validate(&document, &ctx)?;
    Ok(document)
}

fn validate(document: &Document, ctx: &SourceContext) -> Result<()> {
    let indent = document.output.indent;
    if !(1..=OutputConfig::MAX_INDENT).contains(&indent) {
        return Err(ctx.validation_error(
            format!(
                "indent must be between 1 and {}, got {indent}",
                OutputConfig::MAX_INDENT
            ),
            Some("indent"),
        ));
    }

    if let Some(service) = &document.service {
        if service.name.trim().is_empty() {
            return Err(ctx.validation_error("service name must not be empty", Some("name")));
        }
        for (i, element) in service.elements().iter().enumerate() {
            element
                .validate(&format!("service.elements[{i}]"))
                .map_err(|e| ctx.tree_error(e))?;
        }
    }

    for (i, element) in document.elements.iter().enumerate() {
        element
            .validate(&format!("elements[{i}]"))
            .map_err(|e| ctx.tree_error(e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_indent_out_of_range() {
        let err = parse_document("[output]\nindent = 0\n", "tsgen.toml", Format::Toml).unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "indent must be between 1 and 8, got 0");
                assert_eq!(span.map(|s| s.offset()), Some(9));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_reports_path() {
        let src = r#"
[[elements]]
type = "const"
name = "a"
value = "1"

[[elements]]
type = "function"
name = "f"
body = ["let x = 1;", { type = "if", condition = "" }]
"#;
        let err = parse_document(src, "tsgen.toml", Format::Toml).unwrap_err();
        match *err {
            Error::InvalidTree { source, .. } => {
                assert_eq!(source.path(), "elements[1].body[1]");
                assert_eq!(source.kind().as_str(), "if");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_misspelled_element_field() {
        let src = r#"
[[elements]]
type = "interface"
name = "User"
propertis = { id = "number" }
"#;
        let err = parse_document(src, "tsgen.toml", Format::Toml).unwrap_err();
        match *err {
            Error::Parse { source, .. } => {
                assert!(source.message().contains("unknown field `propertis`"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_untagged_object_value() {
        let src = r#"
[[elements]]
type = "const"
name = "cfg"
value = { a = "1", b = "2" }
"#;
        let err = parse_document(src, "tsgen.toml", Format::Toml).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_enum_value() {
        let src = r#"{ "elements": [{ "type": "enum", "name": "E", "members": [{ "name": "A", "value": "" }] }] }"#;
        let err = parse_document(src, "tsgen.json", Format::Json).unwrap_err();
        match *err {
            Error::InvalidTree { source, .. } => {
                assert_eq!(source.path(), "elements[0].members[0]");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_syntax_error_has_span() {
        let err = parse_document("{\n  \"elements\": [,]\n}", "tsgen.json", Format::Json)
            .unwrap_err();
        match *err {
            Error::ParseJson { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_service_name() {
        let err = parse_document("[service]\nname = \" \"\n", "tsgen.toml", Format::Toml)
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
