//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `classpath/` - Classpath registries (TOML manifest, in-memory)
//! - `installation/` - Packaged installation detection
//! - `fs/` - File resolution
//! - `relocation/` - Generated jar cache driving the relocation tool
//! - `events/` - Resolution event sinks

pub mod classpath;
pub mod events;
pub mod fs;
pub mod installation;
pub mod relocation;

// Re-export for convenience
pub use classpath::{ManifestClassPathRegistry, StaticClassPathRegistry};
pub use events::JsonEventSink;
pub use fs::BaseDirFileResolver;
pub use installation::CurrentInstallation;
pub use relocation::{GeneratedJarCache, JarRewriter, RewriteError};
