//! Application Layer
//!
//! Wires configuration and infrastructure into ready-to-use domain services.

mod factory;

pub use factory::{FactoryError, ResolverFactory};
