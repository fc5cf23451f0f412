//! TypeScript element model and renderer for tsgen.
//!
//! A caller describes the constructs to emit as a tree of [`CodeElement`]s
//! and renders it with [`code_gen`]. Rendering is pure and deterministic:
//! the same tree always yields the same bytes.
//!
//! ```
//! use tsgen_typescript::{code_gen, ast::{Enum, Function, ForOf}};
//!
//! let code = code_gen(&[
//!     Enum::new("Colors").member("Red").member_with_value("Blue", "3").exported().into(),
//!     Function::new("paint")
//!         .arg("items", "string[]")
//!         .element(ForOf::new("item", "items").statement("draw(item);"))
//!         .into(),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     code,
//!     "export enum Colors {\n  Red,\n  Blue = 3,\n}\n\nfunction paint(items: string[]) {\n  for (const item of items) {\n    draw(item);\n  }\n\n}\n"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - Element nodes and their per-kind formatters
//! - [`service`] - Composes OData-style service metadata into elements

mod code_file;
mod de;
mod element;
mod error;
mod renderer;

pub mod ast;
pub mod service;

pub use code_file::CodeFile;
pub use element::{CodeElement, ElementKind};
pub use error::{RenderError, Result};
pub use renderer::{code_gen, render};
pub use tsgen_codegen::Indent;
