//! Error types for impldeps
//!
//! Uses `thiserror` for library errors. Every resolution failure names the
//! notation being resolved and the stage that failed.

use std::fmt;

use thiserror::Error;

use crate::domain::ports::{ClassPathError, FileResolveError, RelocationError};
use crate::domain::value_objects::{Notation, RelocationKind};

/// Result type alias for notation resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Sub-step of a resolution that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStage {
    /// Looking up a raw classpath
    Fetch,
    /// Building the relocated jar
    Relocate,
    /// Turning raw paths into a file set
    FileResolve,
}

impl ResolutionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::Fetch => "fetch",
            ResolutionStage::Relocate => "relocate",
            ResolutionStage::FileResolve => "file-resolve",
        }
    }
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single `resolve` call
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The classpath registry has no entry for a key the notation needs
    #[error("cannot resolve {notation}: no classpath registered for '{name}'")]
    UnknownNotation { notation: Notation, name: String },

    /// The classpath registry had an entry but could not produce it
    #[error("cannot resolve {notation}: {source}")]
    ClassPath {
        notation: Notation,
        name: String,
        #[source]
        source: ClassPathError,
    },

    /// The relocated jar could not be generated
    #[error("cannot resolve {notation}: generating the {kind} jar failed: {source}")]
    Relocation {
        notation: Notation,
        kind: RelocationKind,
        #[source]
        source: RelocationError,
    },

    /// Raw paths could not be turned into a file set
    #[error("cannot resolve {notation}: {source}")]
    FileResolution {
        notation: Notation,
        #[source]
        source: FileResolveError,
    },
}

impl ResolveError {
    pub(crate) fn fetch(notation: Notation, name: &str, source: ClassPathError) -> Self {
        match source {
            ClassPathError::NotFound { name } => ResolveError::UnknownNotation { notation, name },
            other => ResolveError::ClassPath {
                notation,
                name: name.to_string(),
                source: other,
            },
        }
    }

    /// The notation whose resolution failed
    pub fn notation(&self) -> Notation {
        match self {
            ResolveError::UnknownNotation { notation, .. }
            | ResolveError::ClassPath { notation, .. }
            | ResolveError::Relocation { notation, .. }
            | ResolveError::FileResolution { notation, .. } => *notation,
        }
    }

    pub fn stage(&self) -> ResolutionStage {
        match self {
            ResolveError::UnknownNotation { .. } | ResolveError::ClassPath { .. } => {
                ResolutionStage::Fetch
            }
            ResolveError::Relocation { .. } => ResolutionStage::Relocate,
            ResolveError::FileResolution { .. } => ResolutionStage::FileResolve,
        }
    }
}
