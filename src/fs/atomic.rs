//! Atomic file replacement.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. `std::fs::rename` replaces an existing file on
//! every supported platform (it maps to `MoveFileExW` with
//! `MOVEFILE_REPLACE_EXISTING` on Windows), so readers observe either the old
//! content or the new content, never a truncated file.
//!
//! A symlinked target is resolved first, so the link survives and the file it
//! points at receives the content. An existing file's permissions carry over.
//!
//! Source and destination share a directory, so they are always on the same
//! volume. A crash between write and rename may leave the temp file behind.

use crate::error::{BridgeError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Example
///
/// ```no_run
/// use ide_bridge::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new(".vscode/settings.json"), b"{}\n")?;
/// # Ok::<(), ide_bridge::error::BridgeError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = resolve_target(path.as_ref());
    let path = path.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            BridgeError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    if let Ok(existing) = fs::metadata(path) {
        let _ = fs::set_permissions(&temp_path, existing.permissions());
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BridgeError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    #[cfg(unix)]
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Follow a symlink to the file it names. Dangling links resolve relative to
/// the link's directory.
fn resolve_target(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return path.to_path_buf();
    }

    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }

    match fs::read_link(path) {
        Ok(link) => path.parent().map_or(link.clone(), |parent| parent.join(link)),
        Err(_) => path.to_path_buf(),
    }
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            BridgeError::IoError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        BridgeError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            BridgeError::IoError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("extensions.json");

        atomic_write_file(&file_path, "{}\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}\n");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("settings.json");
        fs::write(&file_path, "{ \"old\": true }").unwrap();

        atomic_write(&file_path, b"{ \"new\": true }").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{ \"new\": true }");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".vscode").join("launch.json");

        atomic_write_file(&file_path, "{}").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("launch.json");

        atomic_write_file(&file_path, "{}").unwrap();

        assert!(!temp_dir.path().join(".launch.json.tmp").exists());
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/project/.vscode/settings.json")).unwrap();
        assert_eq!(temp, Path::new("/project/.vscode/.settings.json.tmp"));
    }

    #[cfg(unix)]
    #[test]
    fn writes_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let shared = temp_dir.path().join("shared-settings.json");
        let link = temp_dir.path().join("settings.json");
        fs::write(&shared, "{}").unwrap();
        std::os::unix::fs::symlink(&shared, &link).unwrap();

        atomic_write_file(&link, "{ \"new\": true }").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&shared).unwrap(), "{ \"new\": true }");
        assert!(!temp_dir.path().join(".settings.json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("launch.json");
        fs::write(&file_path, "{}").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600)).unwrap();

        atomic_write_file(&file_path, "{ \"version\": \"0.2.0\" }").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join(".vscode");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write_file(blocker.join("settings.json"), "{}").unwrap_err();
        assert!(matches!(err, BridgeError::IoError(_)));
    }
}
