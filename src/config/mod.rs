//! Configuration module for impldeps
//!
//! Configuration hierarchy:
//! 1. Environment variables (IMPLDEPS_*)
//! 2. Config file (`impldeps.toml`)
//! 3. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::{levenshtein, ConfigWarning};
pub use env_validator::{EnvVarValidator, InvalidEnvValue};
pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigError};
pub use types::{CacheConfig, Config, InstallationConfig, InstallationMode, ToolConfig};
