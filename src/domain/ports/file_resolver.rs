//! FileResolver port - turns raw path lists into a [`FileSet`]

use std::path::PathBuf;

use crate::domain::entities::FileSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FileResolveError {
    #[error("empty path at position {index}")]
    EmptyPath { index: usize },

    #[error("path '{path}' escapes the filesystem root")]
    EscapesRoot { path: PathBuf },
}

/// Resolves path-like inputs into a file set.
///
/// Existence is not checked; a missing jar surfaces when the files are used.
pub trait FileResolver: Send + Sync {
    fn resolve_files(&self, paths: &[PathBuf]) -> Result<FileSet, FileResolveError>;
}
