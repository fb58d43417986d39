//! Composition policy
//!
//! Decides, per notation, whether its raw classpath is used as-is or
//! split into a relocated jar plus files that must keep their names.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Notation, RelocationKind};

/// How a notation's files are assembled on a cache miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// Raw classpath, resolved directly
    Direct,
    /// API jars relocated; script runtime and beacon left untouched
    RelocatedApi,
    /// Test-kit jars relocated, layered over the resolved API
    RelocatedTestKit,
}

impl Composition {
    pub fn for_notation(notation: Notation, packaged_installation: bool) -> Self {
        if !packaged_installation {
            return Composition::Direct;
        }
        match notation {
            Notation::ToolApi => Composition::RelocatedApi,
            Notation::ToolTestKit => Composition::RelocatedTestKit,
            Notation::ScriptRuntime
            | Notation::InstallationBeacon
            | Notation::ToolingApi
            | Notation::WorkerProcess => Composition::Direct,
        }
    }

    pub fn relocation_kind(&self) -> Option<RelocationKind> {
        match self {
            Composition::Direct => None,
            Composition::RelocatedApi => Some(RelocationKind::Api),
            Composition::RelocatedTestKit => Some(RelocationKind::TestKit),
        }
    }
}

/// Removes every entry of `excluded` from `classpath`, keeping the order of
/// what remains. Duplicates of an excluded path are all removed.
pub fn remove_all<'a, I>(classpath: &mut Vec<PathBuf>, excluded: I)
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let excluded: HashSet<&Path> = excluded.into_iter().map(PathBuf::as_path).collect();
    if excluded.is_empty() {
        return;
    }
    classpath.retain(|path| !excluded.contains(path.as_path()));
}
