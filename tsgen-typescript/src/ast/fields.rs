//! Ordered `name: type` pairs.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ElementKind, Result, error::require};

/// Insertion-ordered `name → type` pairs for parameters and interface members.
///
/// Order is part of the output, so this is a list rather than a map. In
/// documents it is written as a table, whose key order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn push(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        self.0.push((name.into(), ty.into()));
    }

    /// Append a pair, builder style.
    pub fn with(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push(name, ty);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every pair needs a name and a type. Reported at `{path}.{field}.{name}`,
    /// or `{path}.{field}[{i}]` when the name itself is empty.
    pub(crate) fn validate(&self, kind: ElementKind, field: &'static str, path: &str) -> Result<()> {
        for (i, (name, ty)) in self.iter().enumerate() {
            require(name, kind, field, &format!("{path}.{field}[{i}]"))?;
            require(ty, kind, field, &format!("{path}.{field}.{name}"))?;
        }
        Ok(())
    }

    /// Render as a parameter list: `a: number, b: string`.
    pub fn params(&self) -> String {
        self.iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<IndexMap<String, String>> for Fields {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for Fields {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, t)| (n.into(), t.into()))
                .collect(),
        )
    }
}
