//! TypeScript const declaration builder.

use serde::Deserialize;
use tsgen_codegen::CodeFragment;

use super::{Value, export_prefix, verbatim_lines};
use crate::{ElementKind, Result, error::require};

/// `[export ]const {name} = {value};`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Const {
    pub name: String,
    pub value: Value,
    #[serde(default)]
    pub exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: false,
        }
    }

    /// Mark this const as exported.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Const, "name", path)?;
        match &self.value {
            Value::Raw(expr) => require(expr, ElementKind::Const, "value", path),
            Value::Object(object) => object.validate(ElementKind::Const, &format!("{path}.value")),
        }
    }

    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        let export = export_prefix(self.exported, top_level);
        match &self.value {
            Value::Raw(expr) => {
                verbatim_lines(&format!("{export}const {} = ", self.name), expr, ";")
            }
            Value::Object(object) => {
                vec![object.fragments_as(format!("{export}const {} =", self.name), "};")]
            }
        }
    }
}
