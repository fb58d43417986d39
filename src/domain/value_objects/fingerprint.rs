//! Classpath fingerprint value object
//!
//! Identifies the inputs of a relocated jar so that jars generated from a
//! different classpath never collide in the shared cache directory.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::RelocationKind;

/// SHA-256 over a relocation kind and its ordered input paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClasspathFingerprint(String);

impl ClasspathFingerprint {
    /// Prefix for SHA-256 fingerprints
    pub const PREFIX: &'static str = "sha256:";

    /// Length of the abbreviated form used in file names
    pub const SHORT_LEN: usize = 12;

    pub fn compute<'a, I>(kind: RelocationKind, inputs: I) -> Self
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut hasher = Sha256::new();
        hasher.update(kind.base_name().as_bytes());
        for path in inputs {
            // NUL cannot occur inside a path, so entries stay unambiguous
            hasher.update([0u8]);
            hasher.update(path.as_os_str().as_encoded_bytes());
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..Self::SHORT_LEN.min(hex.len())]
    }
}

impl fmt::Display for ClasspathFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
