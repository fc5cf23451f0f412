use std::path::PathBuf;

use serde::Deserialize;
use tsgen_typescript::Indent;

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File the rendered code is written to. Printed to stdout when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Spaces per indent level.
    #[serde(default = "default_indent")]
    pub indent: u8,

    /// Indent with tabs instead of `indent` spaces.
    #[serde(default)]
    pub tabs: bool,

    /// Comment emitted before the first element.
    #[serde(default)]
    pub banner: Option<String>,
}

fn default_indent() -> u8 {
    2
}

impl OutputConfig {
    pub(crate) const MAX_INDENT: u8 = 8;

    pub fn indent(&self) -> Indent {
        if self.tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent)
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            indent: default_indent(),
            tabs: false,
            banner: None,
        }
    }
}
