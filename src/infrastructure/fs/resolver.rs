//! Base-directory file resolver
//!
//! Implements the FileResolver port: relative entries are anchored at a base
//! directory and every path is normalized lexically. The file system is not
//! consulted.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::FileSet;
use crate::domain::ports::{FileResolveError, FileResolver};

#[derive(Debug, Clone)]
pub struct BaseDirFileResolver {
    base_dir: PathBuf,
}

impl BaseDirFileResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve_one(&self, index: usize, path: &Path) -> Result<PathBuf, FileResolveError> {
        if path.as_os_str().is_empty() {
            return Err(FileResolveError::EmptyPath { index });
        }
        let anchored = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };
        normalize(&anchored)
    }
}

impl FileResolver for BaseDirFileResolver {
    fn resolve_files(&self, paths: &[PathBuf]) -> Result<FileSet, FileResolveError> {
        let resolved = paths
            .iter()
            .enumerate()
            .map(|(index, path)| self.resolve_one(index, path))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FileSet::from_paths(resolved))
    }
}

/// Removes `.` and folds `..` into its parent without touching the disk.
///
/// Leading `..` of a relative path are kept; `..` above an absolute root is
/// an error.
pub fn normalize(path: &Path) -> Result<PathBuf, FileResolveError> {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if path.has_root() {
                    return Err(FileResolveError::EscapesRoot {
                        path: path.to_path_buf(),
                    });
                } else {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    Ok(out)
}
