//! Validate a candidate path and describe the installation behind it.

use std::fs;
use std::path::{Path, PathBuf};

use regex::RegexBuilder;
use tracing::{debug, warn};

use super::editors::EditorSpec;
use super::manifest::Manifest;
use super::platform::Platform;
use super::Installation;

/// Probe `path` as an installation of `editor`.
///
/// Returns `None` if the path does not look like one. A missing or broken
/// manifest only means the version is unknown.
pub fn probe(editor: &EditorSpec, path: &Path, platform: Platform) -> Option<Installation> {
    if path.as_os_str().is_empty() || !is_candidate(editor, path, platform) {
        debug!(editor = editor.id, path = %path.display(), "not an installation");
        return None;
    }

    let base = manifest_base(path, platform)?;
    let manifest = Manifest::load(&base.join("resources").join("app").join("package.json"))
        .unwrap_or_default();

    let version = manifest.editor_version();
    let is_prerelease = manifest.is_insider()
        || path.to_string_lossy().to_ascii_lowercase().contains("insider");

    let mut display_name = editor.display_name.to_string();
    if is_prerelease {
        display_name.push_str(" - Insider");
    }
    if let Some(version) = version {
        display_name.push_str(&format!(" [{}]", version));
    }

    Some(Installation {
        editor: editor.id,
        display_name,
        path: path.to_path_buf(),
        version,
        is_prerelease,
    })
}

/// Platform-specific shape check.
pub fn is_candidate(editor: &EditorSpec, path: &Path, platform: Platform) -> bool {
    let text = path.to_string_lossy();
    match platform {
        Platform::Windows => path.is_file() && matches_pattern(editor.windows_pattern, &text),
        Platform::MacOs => path.is_dir() && matches_pattern(editor.mac_pattern, &text),
        Platform::Linux => {
            path.is_file()
                && text
                    .to_ascii_lowercase()
                    .ends_with(&editor.executable_name.to_ascii_lowercase())
        }
    }
}

fn matches_pattern(pattern: &str, text: &str) -> bool {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => regex.is_match(text),
        Err(e) => {
            warn!(pattern, error = %e, "invalid editor path pattern");
            false
        }
    }
}

/// Directory holding `resources/app/package.json`.
fn manifest_base(path: &Path, platform: Platform) -> Option<PathBuf> {
    match platform {
        Platform::Windows => path.parent().map(Path::to_path_buf),
        Platform::MacOs => Some(path.join("Contents")),
        Platform::Linux => {
            let real = resolve_link(path);
            let parent = real.parent()?;
            if parent.file_name().is_some_and(|name| name == "bin") {
                parent.parent().map(Path::to_path_buf)
            } else {
                Some(parent.to_path_buf())
            }
        }
    }
}

/// Follow one level of symlink; relative targets resolve against the link's
/// directory. Non-links are returned as is.
fn resolve_link(path: &Path) -> PathBuf {
    match fs::read_link(path) {
        Ok(target) if target.is_relative() => path
            .parent()
            .map(|dir| dir.join(&target))
            .unwrap_or(target),
        Ok(target) => target,
        Err(_) => path.to_path_buf(),
    }
}
