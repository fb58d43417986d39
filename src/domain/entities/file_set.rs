//! FileSet entity - an immutable, lazily unioned collection of files
//!
//! Unions are recorded structurally and only flattened when the files are
//! asked for, so `plus` is cheap and never touches the file system.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
enum Node {
    Files {
        display_name: Option<String>,
        paths: Vec<PathBuf>,
    },
    Union(Vec<FileSet>),
}

/// Cheaply clonable set of paths.
///
/// Iteration order is insertion order; a path contributed twice (by either
/// side of a union) is reported once, at its first position.
#[derive(Debug, Clone)]
pub struct FileSet {
    node: Arc<Node>,
}

impl FileSet {
    pub fn empty() -> Self {
        Self::from_paths(Vec::<PathBuf>::new())
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            node: Arc::new(Node::Files {
                display_name: None,
                paths: paths.into_iter().map(Into::into).collect(),
            }),
        }
    }

    /// A single generated artifact, described by `display_name` in diagnostics.
    pub fn artifact(display_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            node: Arc::new(Node::Files {
                display_name: Some(display_name.into()),
                paths: vec![path.into()],
            }),
        }
    }

    /// Union of `self` followed by `other`.
    pub fn plus(&self, other: &FileSet) -> FileSet {
        let mut parts = Vec::new();
        for side in [self, other] {
            match side.node.as_ref() {
                Node::Union(inner) => parts.extend(inner.iter().cloned()),
                Node::Files { .. } => parts.push(side.clone()),
            }
        }
        Self {
            node: Arc::new(Node::Union(parts)),
        }
    }

    /// Flattened, de-duplicated files in insertion order.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.visit(&mut |path| {
            if seen.insert(path.to_path_buf()) {
                out.push(path.to_path_buf());
            }
        });
        out
    }

    pub fn contains(&self, path: &Path) -> bool {
        let mut found = false;
        self.visit(&mut |candidate| found |= candidate == path);
        found
    }

    pub fn len(&self) -> usize {
        self.files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn display_name(&self) -> String {
        match self.node.as_ref() {
            Node::Files {
                display_name: Some(name),
                ..
            } => name.clone(),
            Node::Files { paths, .. } => format!("file collection ({} files)", paths.len()),
            Node::Union(parts) => parts
                .iter()
                .map(FileSet::display_name)
                .collect::<Vec<_>>()
                .join(" + "),
        }
    }

    fn visit(&self, f: &mut dyn FnMut(&Path)) {
        match self.node.as_ref() {
            Node::Files { paths, .. } => {
                for path in paths {
                    f(path.as_path());
                }
            }
            Node::Union(parts) => {
                for part in parts {
                    part.visit(f);
                }
            }
        }
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Content equality: same files in the same order.
impl PartialEq for FileSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.files() == other.files()
    }
}

impl Eq for FileSet {}

impl fmt::Display for FileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
