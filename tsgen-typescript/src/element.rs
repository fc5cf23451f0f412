//! The closed set of renderable constructs.

use std::fmt;

use serde::Deserialize;
use tsgen_codegen::{CodeFragment, Renderable};

use crate::{
    Result,
    ast::{ArrowFunction, Class, Const, Enum, For, ForOf, Function, If, Interface, TypeAlias},
};

/// A node in the element tree describing one construct to emit.
///
/// Deserializes from a table tagged by `type`, e.g.
/// `{ "type": "const", "name": "answer", "value": "42" }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CodeElement {
    Const(Const),
    #[serde(rename = "type")]
    TypeAlias(TypeAlias),
    Interface(Interface),
    Function(Function),
    ArrowFunction(ArrowFunction),
    Class(Class),
    Enum(Enum),
    If(If),
    For(For),
    ForOf(ForOf),
}

impl CodeElement {
    /// The tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Const(_) => ElementKind::Const,
            Self::TypeAlias(_) => ElementKind::TypeAlias,
            Self::Interface(_) => ElementKind::Interface,
            Self::Function(_) => ElementKind::Function,
            Self::ArrowFunction(_) => ElementKind::ArrowFunction,
            Self::Class(_) => ElementKind::Class,
            Self::Enum(_) => ElementKind::Enum,
            Self::If(_) => ElementKind::If,
            Self::For(_) => ElementKind::For,
            Self::ForOf(_) => ElementKind::ForOf,
        }
    }

    /// Check every required field in this subtree.
    pub fn validate(&self, path: &str) -> Result<()> {
        match self {
            Self::Const(e) => e.validate(path),
            Self::TypeAlias(e) => e.validate(path),
            Self::Interface(e) => e.validate(path),
            Self::Function(e) => e.validate(path),
            Self::ArrowFunction(e) => e.validate(path),
            Self::Class(e) => e.validate(path),
            Self::Enum(e) => e.validate(path),
            Self::If(e) => e.validate(path),
            Self::For(e) => e.validate(path),
            Self::ForOf(e) => e.validate(path),
        }
    }

    /// Fragments for this element. `top_level` gates the `export` keyword.
    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        match self {
            Self::Const(e) => e.fragments(top_level),
            Self::TypeAlias(e) => e.fragments(top_level),
            Self::Interface(e) => e.fragments(top_level),
            Self::Function(e) => e.fragments(top_level),
            Self::ArrowFunction(e) => e.fragments(),
            Self::Class(e) => e.fragments(top_level),
            Self::Enum(e) => e.fragments(top_level),
            Self::If(e) => e.fragments(),
            Self::For(e) => e.fragments(),
            Self::ForOf(e) => e.fragments(),
        }
    }
}

/// Rendering a bare element treats it as top-level.
impl Renderable for CodeElement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments(true)
    }
}

macro_rules! impl_from_node {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for CodeElement {
                fn from(node: $node) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    Const => Const,
    TypeAlias => TypeAlias,
    Interface => Interface,
    Function => Function,
    ArrowFunction => ArrowFunction,
    Class => Class,
    Enum => Enum,
    If => If,
    For => For,
    ForOf => ForOf,
}

/// Element tags, as they appear in documents and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Const,
    TypeAlias,
    Interface,
    Function,
    ArrowFunction,
    Class,
    Method,
    Property,
    Enum,
    EnumMember,
    If,
    For,
    ForOf,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::TypeAlias => "type",
            Self::Interface => "interface",
            Self::Function => "function",
            Self::ArrowFunction => "arrowFunction",
            Self::Class => "class",
            Self::Method => "method",
            Self::Property => "property",
            Self::Enum => "enum",
            Self::EnumMember => "enum member",
            Self::If => "if",
            Self::For => "for",
            Self::ForOf => "forOf",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
