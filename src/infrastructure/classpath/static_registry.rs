//! In-memory classpath registry for embedded contexts, where the caller
//! already knows which files back each notation.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::ports::{ClassPathError, ClassPathRegistry};
use crate::domain::value_objects::Notation;

#[derive(Debug, Clone, Default)]
pub struct StaticClassPathRegistry {
    entries: HashMap<String, Vec<PathBuf>>,
}

impl StaticClassPathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notation<I, P>(self, notation: Notation, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.with_entry(notation.name(), files)
    }

    pub fn with_entry<I, P>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.entries
            .insert(name.into(), files.into_iter().map(Into::into).collect());
        self
    }
}

impl ClassPathRegistry for StaticClassPathRegistry {
    fn class_path(&self, name: &str) -> Result<Vec<PathBuf>, ClassPathError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ClassPathError::NotFound {
                name: name.to_string(),
            })
    }
}
