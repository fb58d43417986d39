//! ArtifactRelocator port - builds a namespace-relocated jar from a classpath

use std::path::PathBuf;

use crate::domain::entities::FileSet;
use crate::domain::value_objects::RelocationKind;

#[derive(Debug, thiserror::Error)]
pub enum RelocationError {
    #[error("I/O error while generating {display_name}: {source}")]
    Io {
        display_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("relocation of {display_name} failed: {message}")]
    Rewrite {
        display_name: String,
        message: String,
    },
}

/// Produces one repackaged artifact from a set of input files.
///
/// Whether the result is memoized is up to the implementation; the resolver
/// calls it at most once per notation anyway.
pub trait ArtifactRelocator: Send + Sync {
    fn relocate(
        &self,
        files: &FileSet,
        display_name: &str,
        kind: RelocationKind,
    ) -> Result<PathBuf, RelocationError>;
}
