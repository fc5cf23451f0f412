//! Statement bodies: verbatim lines mixed with nested elements.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};
use tsgen_codegen::{CodeFragment, ends_with_blank};

use crate::{CodeElement, Result};

/// One entry of a block body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    /// Statement text spliced verbatim, one output line per source line.
    Raw(String),
    /// A nested element rendered as its own block.
    Element(CodeElement),
}

impl From<&str> for BodyItem {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for BodyItem {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<CodeElement> for BodyItem {
    fn from(element: CodeElement) -> Self {
        Self::Element(element)
    }
}

impl<'de> Deserialize<'de> for BodyItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BodyItemVisitor;

        impl<'de> Visitor<'de> for BodyItemVisitor {
            type Value = BodyItem;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a statement string or an element table")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<BodyItem, E> {
                Ok(BodyItem::Raw(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<BodyItem, E> {
                Ok(BodyItem::Raw(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<BodyItem, A::Error> {
                CodeElement::deserialize(MapAccessDeserializer::new(map)).map(BodyItem::Element)
            }
        }

        deserializer.deserialize_any(BodyItemVisitor)
    }
}

/// Fragments for a body, one level below its header.
///
/// Consecutive nested elements are separated by one blank line, unless the
/// previous element already ended on one. Raw statements are never separated.
pub(crate) fn body_fragments(items: &[BodyItem]) -> Vec<CodeFragment> {
    let mut out = Vec::new();
    let mut after_element = false;

    for item in items {
        match item {
            BodyItem::Raw(text) => {
                out.extend(text.lines().map(|line| {
                    if line.trim().is_empty() {
                        CodeFragment::Blank
                    } else {
                        CodeFragment::line(line)
                    }
                }));
                after_element = false;
            }
            BodyItem::Element(element) => {
                if after_element && !ends_with_blank(&out) {
                    out.push(CodeFragment::Blank);
                }
                out.extend(element.fragments(false));
                after_element = true;
            }
        }
    }

    out
}

/// Validate the nested elements of a body located at `path.field`.
pub(crate) fn validate_body(items: &[BodyItem], path: &str, field: &str) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if let BodyItem::Element(element) = item {
            element.validate(&format!("{path}.{field}[{i}]"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{For, If};

    #[test]
    fn test_raw_lines() {
        let items = vec![BodyItem::from("const a = 1;\n\nreturn a;")];
        assert_eq!(
            body_fragments(&items),
            vec![
                CodeFragment::line("const a = 1;"),
                CodeFragment::Blank,
                CodeFragment::line("return a;"),
            ]
        );
    }

    #[test]
    fn test_blank_between_elements_only() {
        let items = vec![
            BodyItem::from(CodeElement::from(If::new("a").statement("x();"))),
            BodyItem::from(CodeElement::from(If::new("b").statement("y();"))),
            BodyItem::from("z();"),
        ];
        let fragments = body_fragments(&items);
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[1], CodeFragment::Blank);
        assert_eq!(fragments[3], CodeFragment::line("z();"));
    }

    #[test]
    fn test_loop_trailing_blank_not_doubled() {
        let items = vec![
            BodyItem::from(CodeElement::from(For::new("let i = 0", "i < n", "i++").statement("f(i);"))),
            BodyItem::from(CodeElement::from(If::new("done").statement("return;"))),
        ];
        let fragments = body_fragments(&items);
        let blanks = fragments
            .iter()
            .filter(|f| f.ends_with_blank())
            .count();
        assert_eq!(blanks, 1);
        assert!(!ends_with_blank(&fragments));
    }

    #[test]
    fn test_deserialize_mixed_body() {
        let items: Vec<BodyItem> = serde_json::from_str(
            r#"["let total = 0;", { "type": "forOf", "variable": "x", "iterable": "xs", "body": ["total += x;"] }]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], BodyItem::from("let total = 0;"));
        assert!(matches!(items[1], BodyItem::Element(CodeElement::ForOf(_))));
    }

    #[test]
    fn test_validate_body_reports_path() {
        let items = vec![
            BodyItem::from("ok();"),
            BodyItem::from(CodeElement::from(If::new(""))),
        ];
        let err = validate_body(&items, "elements[0]", "body").unwrap_err();
        assert_eq!(err.path(), "elements[0].body[1]");
    }
}
