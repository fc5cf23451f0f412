//! TypeScript interface builder.

use serde::Deserialize;
use tsgen_codegen::CodeFragment;

use super::{Fields, braced, export_prefix, verbatim_lines};
use crate::{ElementKind, Result, error::require};

/// `[export ]interface {name} { {prop}: {type}; ... }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interface {
    pub name: String,
    #[serde(default, alias = "value")]
    pub properties: Fields,
    #[serde(default)]
    pub exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Fields::new(),
            exported: false,
        }
    }

    /// Add a property signature. Optional members carry their `?` in `name`.
    pub fn property(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.properties.push(name, ty);
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Interface, "name", path)?;
        self.properties
            .validate(ElementKind::Interface, "properties", path)
    }

    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        let export = export_prefix(self.exported, top_level);
        let body = self
            .properties
            .iter()
            .flat_map(|(name, ty)| verbatim_lines(&format!("{name}: "), ty, ";"))
            .collect();
        vec![braced(format!("{export}interface {}", self.name), body, "}")]
    }
}
