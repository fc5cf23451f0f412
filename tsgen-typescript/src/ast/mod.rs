//! TypeScript element nodes and their per-kind formatters.
//!
//! Each node knows how to describe itself as [`CodeFragment`]s and how to
//! check its own required fields; [`CodeElement`] dispatches between them.
//!
//! [`CodeFragment`]: tsgen_codegen::CodeFragment
//! [`CodeElement`]: crate::CodeElement

mod body;
mod class;
mod consts;
mod control;
mod enums;
mod fields;
mod fns;
mod interface;
mod types;
mod values;

pub use body::BodyItem;
pub use class::{Class, ClassProperty, Method, Visibility};
pub use consts::Const;
pub use control::{For, ForOf, If};
pub use enums::{Enum, EnumMember};
pub use fields::Fields;
pub use fns::{ArrowFunction, Function};
pub use interface::Interface;
pub use types::TypeAlias;
pub use values::{ObjectLiteral, Value};

/// The `export ` prefix, only ever applied to top-level declarations.
pub(crate) fn export_prefix(exported: bool, top_level: bool) -> &'static str {
    if exported && top_level { "export " } else { "" }
}

/// `{head}{text}{tail}` with each line of a multi-line `text` as its own
/// fragment, so continuation lines follow the surrounding indentation.
pub(crate) fn verbatim_lines(head: &str, text: &str, tail: &str) -> Vec<tsgen_codegen::CodeFragment> {
    use tsgen_codegen::CodeFragment;

    let lines: Vec<&str> = text.lines().collect();
    let last = lines.len().saturating_sub(1);
    if lines.len() < 2 {
        let only = lines.first().copied().unwrap_or_default();
        return vec![CodeFragment::line(format!("{head}{only}{tail}"))];
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| match i {
            0 => CodeFragment::line(format!("{head}{line}")),
            i if i == last => CodeFragment::line(format!("{line}{tail}")),
            _ if line.trim().is_empty() => CodeFragment::Blank,
            _ => CodeFragment::line(*line),
        })
        .collect()
}

/// A braced block, collapsed to `{}` on the header line when `body` is empty.
///
/// `close` is the closing line (`}`, `};` or `},`); its text after the brace
/// is kept when collapsing.
pub(crate) fn braced(
    header: impl Into<String>,
    body: Vec<tsgen_codegen::CodeFragment>,
    close: &str,
) -> tsgen_codegen::CodeFragment {
    use tsgen_codegen::CodeFragment;

    let header = header.into();
    let open = if header.is_empty() {
        String::new()
    } else {
        format!("{header} ")
    };

    if body.is_empty() {
        let suffix = close.strip_prefix('}').unwrap_or(close);
        CodeFragment::line(format!("{open}{{}}{suffix}"))
    } else {
        CodeFragment::block(format!("{open}{{"), body, close)
    }
}
