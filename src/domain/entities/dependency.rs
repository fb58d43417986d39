//! ResolvedDependency entity - a self-resolving dependency
//!
//! Carries its files directly; nothing downstream needs to look them up again.

use std::fmt;

use super::FileSet;
use crate::domain::value_objects::Notation;

#[derive(Debug)]
pub struct ResolvedDependency {
    notation: Notation,
    files: FileSet,
}

impl ResolvedDependency {
    pub fn new(notation: Notation, files: FileSet) -> Self {
        Self { notation, files }
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// DSL form of the notation this dependency was resolved from
    pub fn display_name(&self) -> &'static str {
        self.notation.display_name()
    }

    /// Already resolved: returns the files it was built with.
    pub fn resolve(&self) -> &FileSet {
        &self.files
    }
}

impl fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.display_name(), self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn display_uses_dsl_form() {
        let dep = ResolvedDependency::new(
            Notation::ScriptRuntime,
            FileSet::from_paths(["lib/script-runtime.jar"]),
        );
        assert_eq!(
            dep.to_string(),
            "localScriptRuntime() [file collection (1 files)]"
        );
        assert_eq!(dep.resolve().files(), vec![PathBuf::from("lib/script-runtime.jar")]);
    }
}
