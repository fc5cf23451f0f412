//! TypeScript type alias builder.

use serde::Deserialize;
use tsgen_codegen::CodeFragment;

use super::{export_prefix, verbatim_lines};
use crate::{ElementKind, Result, error::require};

/// `[export ]type {name} = {value};`
///
/// The value is any type expression, spliced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeAlias {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: false,
        }
    }

    /// Create an alias for a union of the given members.
    pub fn union<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let value = members
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new(name, value)
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::TypeAlias, "name", path)?;
        require(&self.value, ElementKind::TypeAlias, "value", path)
    }

    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        let head = format!("{}type {} = ", export_prefix(self.exported, top_level), self.name);
        verbatim_lines(&head, &self.value, ";")
    }
}
