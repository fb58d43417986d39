//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_relocator;
pub mod classpath_registry;
pub mod file_resolver;
pub mod installation_context;
pub mod resolution_events;

pub use artifact_relocator::{ArtifactRelocator, RelocationError};
pub use classpath_registry::{ClassPathError, ClassPathRegistry};
pub use file_resolver::{FileResolveError, FileResolver};
pub use installation_context::InstallationContext;
pub use resolution_events::{NoopEventSink, ResolutionEvent, ResolutionEventSink};
