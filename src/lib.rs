//! impldeps - resolver for a build tool's built-in classpath notations
//!
//! Build scripts refer to the tool's own API, its test kit and its bundled
//! script runtime through symbolic notations such as `toolApi()`. This crate
//! turns those notations into concrete files, once per process, generating
//! namespace-relocated jars when running from a packaged installation.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{FactoryError, ResolverFactory};
pub use config::{Config, ConfigError};
pub use domain::entities::{FileSet, Installation, ResolvedDependency};
pub use domain::ports::{
    ArtifactRelocator, ClassPathError, ClassPathRegistry, FileResolveError, FileResolver,
    InstallationContext, NoopEventSink, RelocationError, ResolutionEvent, ResolutionEventSink,
};
pub use domain::services::NotationResolver;
pub use domain::value_objects::{Notation, ParseNotationError, RelocationKind};
pub use error::{ResolutionStage, ResolveError, ResolveResult};
