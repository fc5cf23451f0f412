//! Language-agnostic code building blocks for tsgen.
//!
//! Renderers describe output as a tree of [`CodeFragment`]s and hand it to a
//! [`CodeBuilder`], which owns indentation and line termination.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable, ends_with_blank};
pub use indent::Indent;
