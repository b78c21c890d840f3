//! Project context resolution.
//!
//! Every command that touches a project resolves it here first, so paths are
//! absolute and the solution name is decided in one place.

use crate::error::{BridgeError, Result};
use crate::vscode::{resolve_solution_file, VSCODE_DIR};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for a project.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute project root (the directory holding the generated solution).
    pub project_root: PathBuf,

    /// File name of the generated solution, e.g. `Game.sln`.
    pub solution_file: String,
}

impl ProjectContext {
    /// Resolve a project from an optional directory, defaulting to the
    /// current working directory.
    pub fn resolve(project: Option<&Path>, solution: Option<&str>) -> Result<Self> {
        let root = match project {
            Some(dir) => dir.to_path_buf(),
            None => env::current_dir().map_err(|e| {
                BridgeError::UserError(format!("failed to get current working directory: {}", e))
            })?,
        };

        let project_root = root.canonicalize().map_err(|e| {
            BridgeError::UserError(format!(
                "project directory '{}' is not accessible: {}",
                root.display(),
                e
            ))
        })?;

        if !project_root.is_dir() {
            return Err(BridgeError::UserError(format!(
                "project path '{}' is not a directory",
                project_root.display()
            )));
        }

        let solution_file = resolve_solution_file(&project_root, solution)?;

        Ok(Self {
            project_root,
            solution_file,
        })
    }

    /// `<project_root>/.vscode`.
    pub fn vscode_dir(&self) -> PathBuf {
        self.project_root.join(VSCODE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InProjectDir, unity_project};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn resolves_explicit_directory() {
        let temp_dir = unity_project(&["Game.sln"]);

        let ctx = ProjectContext::resolve(Some(temp_dir.path()), None).unwrap();

        assert_eq!(ctx.project_root, temp_dir.path().canonicalize().unwrap());
        assert_eq!(ctx.solution_file, "Game.sln");
        assert_eq!(ctx.vscode_dir(), ctx.project_root.join(".vscode"));
    }

    #[test]
    #[serial]
    fn defaults_to_current_directory() {
        let temp_dir = unity_project(&[]);
        let _cwd = InProjectDir::enter(temp_dir.path());

        let ctx = ProjectContext::resolve(None, Some("Other.sln")).unwrap();

        assert_eq!(ctx.project_root, temp_dir.path().canonicalize().unwrap());
        assert_eq!(ctx.solution_file, "Other.sln");
    }

    #[test]
    #[serial]
    fn current_directory_picks_its_only_solution() {
        let temp_dir = unity_project(&["Shooter.sln"]);
        let _cwd = InProjectDir::enter(temp_dir.path());

        let ctx = ProjectContext::resolve(None, None).unwrap();

        assert_eq!(ctx.solution_file, "Shooter.sln");
    }

    #[test]
    fn missing_directory_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ProjectContext::resolve(Some(temp_dir.path().join("absent").as_path()), None).unwrap_err();
        assert!(matches!(err, BridgeError::UserError(_)));
    }

    #[test]
    fn file_is_not_a_project() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Game.sln");
        std::fs::write(&file, "").unwrap();

        let err = ProjectContext::resolve(Some(file.as_path()), None).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
