//! Configuration loading
//!
//! Priority (highest first):
//! 1. Environment variables (`IMPLDEPS_*`)
//! 2. Config file
//! 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use super::env_validator::EnvVarValidator;
use super::types::{Config, InstallationMode};
use crate::domain::value_objects::{levenshtein, ConfigWarning};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.split('.').next_back().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `path` if given and present, else defaults; env overrides on top.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) if path.exists() => Config::load(path)?,
        _ => Config::default(),
    };
    Ok(with_env_overrides(config))
}

/// Apply environment variable overrides (`IMPLDEPS_*` prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(home) = lookup("IMPLDEPS_HOME").filter(|v| !v.is_empty()) {
        config.installation.home = Some(PathBuf::from(home));
    }

    if let Some(dir) = lookup("IMPLDEPS_CACHE_DIR").filter(|v| !v.is_empty()) {
        config.cache.dir = Some(PathBuf::from(dir));
    }

    if let Some(version) = lookup("IMPLDEPS_TOOL_VERSION").filter(|v| !v.is_empty()) {
        config.tool.version = version;
    }

    if let Some(mode) = lookup("IMPLDEPS_INSTALLATION_MODE") {
        let validator = EnvVarValidator::new("IMPLDEPS_INSTALLATION_MODE", &["auto", "embedded"]);
        config.installation.mode = validator.parse(
            &mode,
            |v| match v.to_lowercase().as_str() {
                "auto" => Some(InstallationMode::Auto),
                "embedded" => Some(InstallationMode::Embedded),
                _ => None,
            },
            config.installation.mode,
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tool",
        "name",
        "version",
        "installation",
        "mode",
        "home",
        "beacon",
        "manifest",
        "cache",
        "dir",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
