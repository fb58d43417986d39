//! Classpath Registry Implementations

mod manifest;
mod static_registry;

pub use manifest::{ManifestClassPathRegistry, MANIFEST_VERSION};
pub use static_registry::StaticClassPathRegistry;
