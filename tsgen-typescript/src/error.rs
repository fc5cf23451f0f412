use thiserror::Error;

use crate::ElementKind;

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// A malformed element tree.
///
/// Raised before any text is produced, so a failed render never yields a
/// partially generated file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{kind} element at `{path}` is missing required field `{field}`")]
    MissingField {
        kind: ElementKind,
        field: &'static str,
        path: String,
    },
}

impl RenderError {
    /// The tag of the offending element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::MissingField { kind, .. } => *kind,
        }
    }

    /// Location of the offending element, e.g. `elements[1].body[0]`.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path, .. } => path,
        }
    }
}

/// Fail with [`RenderError::MissingField`] when `value` is empty.
pub(crate) fn require(value: &str, kind: ElementKind, field: &'static str, path: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RenderError::MissingField {
            kind,
            field,
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Like [`require`], for optional fields: absent is fine, present-but-empty is not.
pub(crate) fn require_some(
    value: Option<&str>,
    kind: ElementKind,
    field: &'static str,
    path: &str,
) -> Result<()> {
    value.map_or(Ok(()), |v| require(v, kind, field, path))
}
