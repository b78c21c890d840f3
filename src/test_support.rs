//! Fixtures shared by unit tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static WORKING_DIR: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Runs a test from inside a project directory, restoring the previous
/// working directory on drop.
///
/// Holds a process-wide lock as well as relying on `#[serial]`.
pub(crate) struct InProjectDir {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl InProjectDir {
    pub(crate) fn enter(project: &Path) -> Self {
        let lock = WORKING_DIR.lock().unwrap_or_else(|poison| poison.into_inner());
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(project).unwrap();
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for InProjectDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// A temporary Unity project root holding an empty `.sln` per name.
pub(crate) fn unity_project(solutions: &[&str]) -> TempDir {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("Assets")).unwrap();
    for solution in solutions {
        fs::write(project.path().join(solution), "").unwrap();
    }
    project
}
