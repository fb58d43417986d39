//! Relocation kind - which repackaged jar is being produced

use std::fmt;

use serde::{Deserialize, Serialize};

/// Repackaging flavor handed to the artifact relocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelocationKind {
    /// The relocated tool API jar
    Api,
    /// The relocated test-harness jar
    TestKit,
}

impl RelocationKind {
    /// Middle segment of the generated jar's file name
    pub fn base_name(&self) -> &'static str {
        match self {
            RelocationKind::Api => "api",
            RelocationKind::TestKit => "test-kit",
        }
    }
}

impl fmt::Display for RelocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())
    }
}
