//! Domain Entities
//!
//! Core domain objects with identity and lifecycle.

mod dependency;
mod file_set;
mod installation;

pub use dependency::ResolvedDependency;
pub use file_set::FileSet;
pub use installation::Installation;
