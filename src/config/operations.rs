//! Config loading and validation.

use super::model::Config;
use crate::discovery::find_editor;
use crate::error::{BridgeError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `<config dir>/ide-bridge/config.yaml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ide-bridge").join("config.yaml"))
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            BridgeError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BridgeError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `extension_id` and `debugger_type` must be non-empty
    /// - `default_editor`, when set, must name a supported editor
    /// - `extra_paths` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.extension_id.trim().is_empty() {
            return Err(BridgeError::ConfigError(
                "extension_id must not be empty".to_string(),
            ));
        }

        if self.debugger_type.trim().is_empty() {
            return Err(BridgeError::ConfigError(
                "debugger_type must not be empty".to_string(),
            ));
        }

        if let Some(editor) = &self.default_editor
            && find_editor(editor).is_none()
        {
            return Err(BridgeError::ConfigError(format!(
                "default_editor '{}' is not a supported editor",
                editor
            )));
        }

        if self.extra_paths.iter().any(|p| p.trim().is_empty()) {
            return Err(BridgeError::ConfigError(
                "extra_paths entries must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `extra_paths` as filesystem paths.
    pub fn extra_search_paths(&self) -> Vec<PathBuf> {
        self.extra_paths.iter().map(PathBuf::from).collect()
    }
}
