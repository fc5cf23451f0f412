//! Element document parsing and validation for tsgen.
//!
//! A document describes where generated code goes and which elements to
//! render. It is written in TOML (`tsgen.toml`) or JSON:
//!
//! ```toml
//! [output]
//! path = "src/generated/types.ts"
//! banner = "Generated by tsgen. Do not edit."
//!
//! [[elements]]
//! type = "const"
//! name = "answer"
//! value = 42
//! exported = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod document;
mod error;
mod file;
mod output;
mod parse;

pub use document::Document;
pub use error::{Error, Result, SourceContext};
pub use file::{DocumentFile, Format};
pub use output::OutputConfig;
pub use parse::parse_document;
