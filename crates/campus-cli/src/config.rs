//! CLI configuration

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campus-map")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt printed before each harness command
    pub prompt: String,

    /// Cap on paths printed per query (None = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<NonZeroUsize>,

    /// Map file loaded when the harness starts without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_map: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Command: ".to_string(),
            max_paths: None,
            default_map: None,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults if absent or invalid
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring invalid config file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Current value of `key` in its string form
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::Prompt => Some(self.prompt.clone()),
            ConfigKey::MaxPaths => self.max_paths.map(|n| n.to_string()),
            ConfigKey::DefaultMap => self.default_map.as_ref().map(|p| p.display().to_string()),
        }
    }

    /// Set `key` from its string form; "none" or "" clears optional keys
    pub fn set(&mut self, key: ConfigKey, value: &str) -> anyhow::Result<()> {
        let cleared = value.eq_ignore_ascii_case("none") || value.is_empty();
        match key {
            ConfigKey::Prompt => self.prompt = value.to_string(),
            ConfigKey::MaxPaths if cleared => self.max_paths = None,
            ConfigKey::MaxPaths => {
                let max: NonZeroUsize = value.parse().with_context(|| {
                    format!("max_paths must be a positive number, got '{}'", value)
                })?;
                self.max_paths = Some(max);
            }
            ConfigKey::DefaultMap if cleared => self.default_map = None,
            ConfigKey::DefaultMap => self.default_map = Some(PathBuf::from(value)),
        }
        Ok(())
    }
}

/// Keys accepted by `config get` and `config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Prompt printed before each harness command
    Prompt,
    /// Cap on paths listed per query
    #[value(name = "max_paths")]
    MaxPaths,
    /// Map file the harness loads by default
    #[value(name = "default_map")]
    DefaultMap,
}

impl ConfigKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::MaxPaths => "max_paths",
            Self::DefaultMap => "default_map",
        }
    }
}
