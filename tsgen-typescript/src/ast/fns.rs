//! TypeScript function and arrow function builders.

use serde::Deserialize;
use tsgen_codegen::CodeFragment;

use super::{
    BodyItem, Fields, braced,
    body::{body_fragments, validate_body},
    export_prefix,
};
use crate::{
    CodeElement, ElementKind, Result,
    error::{require, require_some},
};

/// `: {ty}` when a return type is present.
pub(crate) fn return_annotation(return_type: Option<&str>) -> String {
    match return_type {
        Some(ty) => format!(": {ty}"),
        None => String::new(),
    }
}

/// `[export ]function {name}({args})[: {ret}] { ... }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub args: Fields,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub body: Vec<BodyItem>,
    #[serde(default)]
    pub exported: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Fields::new(),
            return_type: None,
            body: Vec::new(),
            exported: false,
        }
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(name, ty);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Append a verbatim statement to the body.
    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Raw(text.into()));
        self
    }

    /// Append a nested element to the body.
    pub fn element(mut self, element: impl Into<CodeElement>) -> Self {
        self.body.push(BodyItem::Element(element.into()));
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Function, "name", path)?;
        self.args.validate(ElementKind::Function, "args", path)?;
        require_some(self.return_type.as_deref(), ElementKind::Function, "returnType", path)?;
        validate_body(&self.body, path, "body")
    }

    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        let header = format!(
            "{}function {}({}){}",
            export_prefix(self.exported, top_level),
            self.name,
            self.args.params(),
            return_annotation(self.return_type.as_deref())
        );
        vec![braced(header, body_fragments(&self.body), "}")]
    }
}

/// `({args})[: {ret}] => { ... };`
///
/// Always an expression statement: never named, never exported.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArrowFunction {
    #[serde(default)]
    pub args: Fields,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub body: Vec<BodyItem>,
}

impl ArrowFunction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(name, ty);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
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
        self.args.validate(ElementKind::ArrowFunction, "args", path)?;
        require_some(
            self.return_type.as_deref(),
            ElementKind::ArrowFunction,
            "returnType",
            path,
        )?;
        validate_body(&self.body, path, "body")
    }

    pub(crate) fn fragments(&self) -> Vec<CodeFragment> {
        let header = format!(
            "({}){} =>",
            self.args.params(),
            return_annotation(self.return_type.as_deref())
        );
        vec![braced(header, body_fragments(&self.body), "};")]
    }
}

#[cfg(test)]
mod tests {
    use tsgen_codegen::CodeBuilder;

    use super::*;
    use crate::ast::If;

    fn build(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::typescript();
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_fn_with_params() {
        let f = Function::new("add")
            .arg("a", "number")
            .arg("b", "number")
            .returns("number")
            .statement("return a + b;")
            .exported();
        assert_eq!(
            build(f.fragments(true)),
            "export function add(a: number, b: number): number {\n  return a + b;\n}\n"
        );
    }

    #[test]
    fn test_fn_without_return_type() {
        let f = Function::new("log").arg("msg", "string").statement("console.log(msg);");
        assert_eq!(
            build(f.fragments(true)),
            "function log(msg: string) {\n  console.log(msg);\n}\n"
        );
    }

    #[test]
    fn test_empty_fn() {
        assert_eq!(build(Function::new("noop").fragments(true)), "function noop() {}\n");
    }

    #[test]
    fn test_nested_block_indentation() {
        let f = Function::new("check")
            .arg("x", "number")
            .element(If::new("x > 0").statement("return true;"))
            .statement("return false;");
        assert_eq!(
            build(f.fragments(true)),
            "function check(x: number) {\n  if (x > 0) {\n    return true;\n  }\n  return false;\n}\n"
        );
    }

    #[test]
    fn test_arrow_fn() {
        let f = ArrowFunction::new()
            .arg("a", "number")
            .returns("number")
            .statement("return a * 2;");
        assert_eq!(
            build(f.fragments()),
            "(a: number): number => {\n  return a * 2;\n};\n"
        );
    }

    #[test]
    fn test_empty_arrow_fn() {
        assert_eq!(build(ArrowFunction::new().fragments()), "() => {};\n");
    }

    #[test]
    fn test_empty_return_type() {
        let err = Function::new("f").returns(" ").validate("elements[0]").unwrap_err();
        assert!(err.to_string().contains("missing required field `returnType`"));

        let err = ArrowFunction::new().returns("").validate("elements[1]").unwrap_err();
        assert_eq!(err.kind(), ElementKind::ArrowFunction);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = serde_json::from_str::<Function>(r#"{ "name": "f", "arguments": {} }"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `arguments`"));
    }

    #[test]
    fn test_missing_name() {
        let err = Function::new("").validate("elements[2]").unwrap_err();
        assert_eq!(err.kind(), ElementKind::Function);
    }
}
