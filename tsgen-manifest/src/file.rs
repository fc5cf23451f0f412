use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Document, Error, Result, parse::parse_document};

/// Source syntax of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// JSON for a `.json` extension, TOML otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// A document file on disk.
#[derive(Debug)]
pub struct DocumentFile {
    path: PathBuf,
    content: String,
    document: Document,
}

impl DocumentFile {
    /// Open and parse a document file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let document = parse_document(&content, &filename, Format::from_path(&path))?;
        debug!(
            path = %filename,
            elements = document.elements.len(),
            service = document.service.is_some(),
            "loaded document"
        );

        Ok(Self {
            path,
            content,
            document,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
