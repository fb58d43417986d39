//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigError};
use crate::domain::value_objects::ConfigWarning;

/// Identity of the tool whose notations are being resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default = "default_tool_name")]
    pub name: String,

    #[serde(default = "default_tool_version")]
    pub version: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: default_tool_name(),
            version: default_tool_version(),
        }
    }
}

fn default_tool_name() -> String {
    "tool".to_string()
}

fn default_tool_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// How the installation context is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallationMode {
    /// Packaged if the configured home contains the beacon
    #[default]
    Auto,
    /// Never packaged (tests, IDE import, development checkouts)
    Embedded,
}

/// Where the packaged installation lives and how it is recognised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationConfig {
    #[serde(default)]
    pub mode: InstallationMode,

    #[serde(default)]
    pub home: Option<PathBuf>,

    /// File name of the beacon jar inside `<home>/lib`
    #[serde(default = "default_beacon")]
    pub beacon: String,

    /// Classpath manifest, relative to the installation home
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            mode: InstallationMode::default(),
            home: None,
            beacon: default_beacon(),
            manifest: default_manifest(),
        }
    }
}

fn default_beacon() -> String {
    "installation-beacon.jar".to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from("lib/classpath.toml")
}

/// Location of generated (relocated) jars
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub installation: InstallationConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and report unknown keys
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Directory receiving generated jars: the configured one, else the
    /// user cache dir (`~/.cache/<tool>` on Linux).
    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.cache
            .dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(&self.tool.name)))
    }
}
