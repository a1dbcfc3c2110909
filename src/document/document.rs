//! Plain-text document identified by its file path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConcordError, Result};

/// A plain-text document on disk. Identity is the file path; the raw text is
/// loaded on demand and never cached at this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    /// Create a document for the given path. The file is not touched until
    /// [`Document::read`] is called.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Document { path: path.into() }
    }

    /// The path this document was created with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a file exists at the document path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The base filename of the document path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Read the entire document as a single string.
    ///
    /// A missing file surfaces as [`ConcordError::NotFound`]; other I/O
    /// failures propagate as [`ConcordError::Io`]. Neither is retried.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                ConcordError::not_found(format!("document not found: {}", self.path.display()))
            }
            _ => ConcordError::Io(e),
        })
    }
}
