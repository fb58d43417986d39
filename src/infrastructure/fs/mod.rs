//! File System Implementations
//!
//! Concrete implementation of the FileResolver port.

mod resolver;

pub use resolver::{normalize, BaseDirFileResolver};
