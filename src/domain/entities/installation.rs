//! Installation entity - a packaged distribution of the tool on disk

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    home: PathBuf,
    version: String,
}

impl Installation {
    pub fn new(home: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            version: version.into(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.home.join("lib")
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lib_dir_is_under_home() {
        let installation = Installation::new("/opt/tool", "8.2");
        assert_eq!(installation.lib_dir(), PathBuf::from("/opt/tool/lib"));
        assert_eq!(installation.version(), "8.2");
    }
}
