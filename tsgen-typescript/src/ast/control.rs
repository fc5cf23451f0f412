//! Control-flow blocks: `if`, `for`, and `for...of`.

use serde::Deserialize;
use tsgen_codegen::CodeFragment;

use super::{
    BodyItem, braced,
    body::{body_fragments, validate_body},
};
use crate::{CodeElement, ElementKind, Result, error::require};

/// `if ({condition}) { ... }` with an optional `else` branch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct If {
    pub condition: String,
    #[serde(default)]
    pub body: Vec<BodyItem>,
    #[serde(default, rename = "else")]
    pub otherwise: Option<Vec<BodyItem>>,
}

impl If {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            body: Vec::new(),
            otherwise: None,
        }
    }

    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Raw(text.into()));
        self
    }

    pub fn element(mut self, element: impl Into<CodeElement>) -> Self {
        self.body.push(BodyItem::Element(element.into()));
        self
    }

    /// Append a verbatim statement to the `else` branch, creating it if needed.
    pub fn else_statement(mut self, text: impl Into<String>) -> Self {
        self.otherwise
            .get_or_insert_with(Vec::new)
            .push(BodyItem::Raw(text.into()));
        self
    }

    /// Append a nested element to the `else` branch, creating it if needed.
    pub fn else_element(mut self, element: impl Into<CodeElement>) -> Self {
        self.otherwise
            .get_or_insert_with(Vec::new)
            .push(BodyItem::Element(element.into()));
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.condition, ElementKind::If, "condition", path)?;
        validate_body(&self.body, path, "body")?;
        if let Some(otherwise) = &self.otherwise {
            validate_body(otherwise, path, "else")?;
        }
        Ok(())
    }

    pub(crate) fn fragments(&self) -> Vec<CodeFragment> {
        let header = format!("if ({})", self.condition);
        match &self.otherwise {
            None => vec![braced(header, body_fragments(&self.body), "}")],
            // Both branches always span lines once an `else` is present.
            Some(otherwise) => vec![
                CodeFragment::Block {
                    header: format!("{header} {{"),
                    body: body_fragments(&self.body),
                    close: None,
                },
                CodeFragment::block("} else {", body_fragments(otherwise), "}"),
            ],
        }
    }
}

/// `for ({initializer}; {condition}; {incrementor}) { ... }` plus a trailing blank line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct For {
    #[serde(default)]
    pub initializer: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub incrementor: String,
    #[serde(default)]
    pub body: Vec<BodyItem>,
}

impl For {
    pub fn new(
        initializer: impl Into<String>,
        condition: impl Into<String>,
        incrementor: impl Into<String>,
    ) -> Self {
        Self {
            initializer: initializer.into(),
            condition: condition.into(),
            incrementor: incrementor.into(),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Raw(text.into()));
        self
    }

    pub fn element(mut self, element: impl Into<CodeElement>) -> Self {
        self.body.push(BodyItem::Element(element.into()));
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        validate_body(&self.body, path, "body")
    }

    pub(crate) fn fragments(&self) -> Vec<CodeFragment> {
        let header = format!(
            "for ({}; {}; {})",
            self.initializer, self.condition, self.incrementor
        );
        vec![CodeFragment::sequence(vec![
            braced(header, body_fragments(&self.body), "}"),
            CodeFragment::Blank,
        ])]
    }
}

/// `for (const {variable} of {iterable}) { ... }` plus a trailing blank line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForOf {
    pub variable: String,
    pub iterable: String,
    #[serde(default)]
    pub body: Vec<BodyItem>,
}

impl ForOf {
    pub fn new(variable: impl Into<String>, iterable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            iterable: iterable.into(),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Raw(text.into()));
        self
    }

    pub fn element(mut self, element: impl Into<CodeElement>) -> Self {
        self.body.push(BodyItem::Element(element.into()));
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.variable, ElementKind::ForOf, "variable", path)?;
        require(&self.iterable, ElementKind::ForOf, "iterable", path)?;
        validate_body(&self.body, path, "body")
    }

    pub(crate) fn fragments(&self) -> Vec<CodeFragment> {
        let header = format!("for (const {} of {})", self.variable, self.iterable);
        vec![CodeFragment::sequence(vec![
            braced(header, body_fragments(&self.body), "}"),
            CodeFragment::Blank,
        ])]
    }
}

#[cfg(test)]
mod tests {
    use tsgen_codegen::CodeBuilder;

    use super::*;

    fn build(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::typescript();
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_if_block() {
        let block = If::new("ready").statement("start();");
        assert_eq!(build(block.fragments()), "if (ready) {\n  start();\n}\n");
    }

    #[test]
    fn test_if_else() {
        let block = If::new("ok")
            .statement("resolve();")
            .else_statement("reject();");
        assert_eq!(
            build(block.fragments()),
            "if (ok) {\n  resolve();\n} else {\n  reject();\n}\n"
        );
    }

    #[test]
    fn test_for_trailing_blank() {
        let block = For::new("let i = 0", "i < 10", "i++").statement("sum += i;");
        assert_eq!(
            build(block.fragments()),
            "for (let i = 0; i < 10; i++) {\n  sum += i;\n}\n\n"
        );
    }

    #[test]
    fn test_infinite_for() {
        let block = For::new("", "", "").statement("tick();");
        assert!(build(block.fragments()).starts_with("for (; ; ) {\n"));
    }

    #[test]
    fn test_for_of() {
        let block = ForOf::new("item", "items").statement("console.log(item);");
        assert_eq!(
            build(block.fragments()),
            "for (const item of items) {\n  console.log(item);\n}\n\n"
        );
    }

    #[test]
    fn test_for_of_requires_iterable() {
        let err = ForOf::new("x", "").validate("elements[0]").unwrap_err();
        assert!(err.to_string().contains("`iterable`"));
    }

    #[test]
    fn test_deserialize_else() {
        let block: If = serde_json::from_str(
            r#"{ "condition": "a", "body": ["x();"], "else": ["y();"] }"#,
        )
        .unwrap();
        assert_eq!(block, If::new("a").statement("x();").else_statement("y();"));
    }

    #[test]
    fn test_misspelled_else_rejected() {
        let err = serde_json::from_str::<If>(r#"{ "condition": "a", "otherwise": ["y();"] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `otherwise`"));
    }
}
