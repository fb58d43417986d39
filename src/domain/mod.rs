//! Domain Layer
//!
//! The core of impldeps - notation resolution without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - FileSet, ResolvedDependency, Installation
//! - `value_objects/` - Notation, RelocationKind, ClasspathFingerprint
//! - `services/` - NotationResolver and its composition policy
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - Registry, installation, file resolution and
//!    relocation all go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
