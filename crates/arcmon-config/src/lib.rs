//! Configuration for arcmon.
//!
//! Layers, lowest to highest: built-in defaults, a TOML file, then
//! `ARCMON_`-prefixed environment variables (`__` separates sections, so
//! `ARCMON_TOOLS__TIMEOUT_SECS=10` sets `tools.timeout_secs`). The result
//! translates into `arcmon_api::ToolConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use arcmon_api::{DEFAULT_SEARCH_PATHS, DEFAULT_TIMEOUT, ToolConfig};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "ARCMON_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsSection,
}

/// `[tools]`: where the utilities live and how long they may run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolsSection {
    #[serde(default = "default_arcconf")]
    pub arcconf: String,

    #[serde(default = "default_lspci")]
    pub lspci: String,

    /// Searched in order for bare binary names.
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            arcconf: default_arcconf(),
            lspci: default_lspci(),
            search_paths: default_search_paths(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_arcconf() -> String {
    "arcconf".into()
}
fn default_lspci() -> String {
    "lspci".into()
}
fn default_search_paths() -> Vec<PathBuf> {
    DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tools = &self.tools;
        if tools.timeout_secs == 0 {
            return Err(invalid("tools.timeout_secs", "must be at least 1"));
        }
        if tools.arcconf.trim().is_empty() {
            return Err(invalid("tools.arcconf", "must not be empty"));
        }
        if tools.lspci.trim().is_empty() {
            return Err(invalid("tools.lspci", "must not be empty"));
        }
        if tools.search_paths.is_empty() {
            return Err(invalid(
                "tools.search_paths",
                "must list at least one directory",
            ));
        }
        Ok(())
    }

    pub fn to_tool_config(&self) -> ToolConfig {
        ToolConfig {
            arcconf: self.tools.arcconf.clone(),
            lspci: self.tools.lspci.clone(),
            search_paths: self.tools.search_paths.clone(),
            timeout: Duration::from_secs(self.tools.timeout_secs),
        }
    }

    /// Render as TOML, the format `load_config` reads back.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "arcmon").map_or_else(
        || PathBuf::from("/etc/arcmon/config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// The layered provider stack for `path`.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load and validate the configuration.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => config_path(),
    };

    let config: Config = figment(&path).extract()?;
    config.validate()?;
    Ok(config)
}
