//! Discovery of locally installed editors.
//!
//! Discovery is a flat pipeline: enumerate candidate paths for each editor,
//! probe each candidate, keep the ones that look like installations. Nothing
//! is cached; every call hits the filesystem again.

mod candidates;
pub mod editors;
mod extension;
mod manifest;
mod platform;
mod probe;


pub use candidates::{list_candidate_paths, parse_desktop_exec};
pub use editors::{find_editor, EditorSpec, EDITORS};
pub use extension::{find_unity_extension, list_analyzers};
pub use manifest::{EditorVersion, Manifest};
pub use platform::{parse_xdg_data_dirs, Platform, SearchEnv};
pub use probe::{is_candidate, probe};

use serde::Serialize;
use std::path::PathBuf;

/// One editor installation found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    /// [`EditorSpec::id`] of the editor.
    pub editor: &'static str,
    /// e.g. `Cursor - Insider [1.2.3]`.
    pub display_name: String,
    pub path: PathBuf,
    /// `None` when the manifest is missing or unparseable.
    pub version: Option<EditorVersion>,
    pub is_prerelease: bool,
}

/// Probe every candidate of every editor in `editors`.
///
/// Candidates are de-duplicated per editor, keeping the first occurrence.
pub fn discover_installations(
    editors: &[EditorSpec],
    platform: Platform,
    env: &SearchEnv,
) -> Vec<Installation> {
    let mut installations = Vec::new();

    for editor in editors {
        let mut seen: Vec<PathBuf> = Vec::new();
        for candidate in list_candidate_paths(editor, platform, env) {
            if seen.contains(&candidate) {
                continue;
            }
            if let Some(installation) = probe(editor, &candidate, platform) {
                installations.push(installation);
            }
            seen.push(candidate);
        }
    }

    installations
}
