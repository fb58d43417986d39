//! Artifact Relocator Implementations

mod generated_jars;

pub use generated_jars::{GeneratedJarCache, JarRewriter, RewriteError};
