//! TOML Classpath Manifest Registry
//!
//! Reads the classpath manifest shipped in an installation's `lib/` dir:
//!
//! ```toml
//! version = 1
//!
//! [classpath]
//! TOOL_API = ["lib/tool-core-api.jar", "lib/script-runtime.jar"]
//! SCRIPT_RUNTIME = ["lib/script-runtime.jar"]
//! ```
//!
//! The manifest is read on first lookup. A failed read is not remembered, so
//! a later lookup tries again.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{ClassPathError, ClassPathRegistry};

/// Manifest format version understood by this reader
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlManifest {
    version: u32,
    #[serde(default)]
    classpath: BTreeMap<String, Vec<PathBuf>>,
}

type Entries = Arc<BTreeMap<String, Vec<PathBuf>>>;

pub struct ManifestClassPathRegistry {
    path: PathBuf,
    base_dir: PathBuf,
    entries: Mutex<Option<Entries>>,
}

impl ManifestClassPathRegistry {
    /// Registry backed by the manifest at `path`; relative entries are
    /// anchored at `base_dir` (normally the installation home).
    pub fn new(path: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_dir: base_dir.into(),
            entries: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self, name: &str) -> Result<Entries, ClassPathError> {
        let mut slot = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entries) = slot.as_ref() {
            return Ok(entries.clone());
        }

        let entries = Arc::new(self.load_from_disk(name)?);
        debug!(manifest = %self.path.display(), keys = entries.len(), "loaded classpath manifest");
        *slot = Some(entries.clone());
        Ok(entries)
    }

    fn load_from_disk(&self, name: &str) -> Result<BTreeMap<String, Vec<PathBuf>>, ClassPathError> {
        let unreadable = |message: String| ClassPathError::Unreadable {
            name: name.to_string(),
            message: format!("{}: {}", self.path.display(), message),
        };

        let content = fs::read_to_string(&self.path).map_err(|e| unreadable(e.to_string()))?;
        let manifest: TomlManifest =
            toml::from_str(&content).map_err(|e| unreadable(e.to_string()))?;

        if manifest.version != MANIFEST_VERSION {
            return Err(unreadable(format!(
                "unsupported manifest version {} (expected {})",
                manifest.version, MANIFEST_VERSION
            )));
        }

        Ok(manifest
            .classpath
            .into_iter()
            .map(|(key, files)| {
                let files = files
                    .into_iter()
                    .map(|file| {
                        if file.is_absolute() {
                            file
                        } else {
                            self.base_dir.join(file)
                        }
                    })
                    .collect();
                (key, files)
            })
            .collect())
    }
}

impl ClassPathRegistry for ManifestClassPathRegistry {
    fn class_path(&self, name: &str) -> Result<Vec<PathBuf>, ClassPathError> {
        self.entries(name)?
            .get(name)
            .cloned()
            .ok_or_else(|| ClassPathError::NotFound {
                name: name.to_string(),
            })
    }
}
