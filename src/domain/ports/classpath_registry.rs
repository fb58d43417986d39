//! ClassPathRegistry port - raw classpath lookup by notation key
//!
//! Returns the unresolved file list the installation knows for a key.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClassPathError {
    #[error("no classpath registered for '{name}'")]
    NotFound { name: String },

    #[error("classpath for '{name}' could not be read: {message}")]
    Unreadable { name: String, message: String },
}

/// Source of raw classpaths.
///
/// Implementations must hand out a fresh `Vec` on every call; callers own it
/// and remove entries from it freely.
pub trait ClassPathRegistry: Send + Sync {
    fn class_path(&self, name: &str) -> Result<Vec<PathBuf>, ClassPathError>;
}
