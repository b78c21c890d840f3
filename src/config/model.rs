//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

use crate::vscode::{DEFAULT_DEBUGGER_TYPE, DEFAULT_EXTENSION_ID};

/// Configuration for ide-bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Project files
    // =========================================================================
    /// Extension recommended in `.vscode/extensions.json`.
    pub extension_id: String,

    /// `type` of the attach configuration kept in `.vscode/launch.json`.
    pub debugger_type: String,

    /// Whether existing `.vscode` files may be rewritten. Missing files are
    /// always created.
    pub patch_existing: bool,

    // =========================================================================
    // Discovery
    // =========================================================================
    /// Editor id used by `open` when neither `--editor` nor `--install` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_editor: Option<String>,

    /// Extra paths probed for every editor, after the built-in locations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension_id: DEFAULT_EXTENSION_ID.to_string(),
            debugger_type: DEFAULT_DEBUGGER_TYPE.to_string(),
            patch_existing: true,
            default_editor: None,
            extra_paths: Vec::new(),
        }
    }
}
