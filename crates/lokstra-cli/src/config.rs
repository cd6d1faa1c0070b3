//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`LOKSTRA_TEMPLATE`, `LOKSTRA_MODULE_PREFIX`)
//! 3. Config file (`--config` path, or the default location)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Module-path prefix used when `--module` is not given.
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/example";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generated projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template name used when `--template` is not given.
    pub template: Option<String>,
    /// Module-path prefix for `github.com/example/<name>` style defaults.
    pub module_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: None,
            module_prefix: DEFAULT_MODULE_PREFIX.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file if one exists,
    /// then environment overrides.
    ///
    /// A `--config` path that does not exist is an error; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::read_file(path)?,
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::read_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(template) = std::env::var("LOKSTRA_TEMPLATE")
            && !template.is_empty()
        {
            config.defaults.template = Some(template);
        }
        if let Ok(prefix) = std::env::var("LOKSTRA_MODULE_PREFIX")
            && !prefix.is_empty()
        {
            config.defaults.module_prefix = prefix;
        }

        Ok(config)
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file '{}': {e}", path.display()))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("cannot parse config file '{}': {e}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.lokstra.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "lokstra", "lokstra")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".lokstra.toml"))
    }

    /// Module path for a project when the user gave none.
    pub fn default_module_path(&self, name: &str) -> String {
        format!("{}/{}", self.defaults.module_prefix.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_is_unset() {
        assert_eq!(AppConfig::default().defaults.template, None);
    }

    #[test]
    fn default_module_path_uses_prefix() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_module_path("my-api"), "github.com/example/my-api");
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ntemplate = \"org-default\"\n").unwrap();

        let cfg = AppConfig::read_file(&path).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("org-default"));
        assert_eq!(cfg.defaults.module_prefix, DEFAULT_MODULE_PREFIX);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/lokstra.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(AppConfig::read_file(&path).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
