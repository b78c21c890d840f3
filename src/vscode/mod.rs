//! Per-project `.vscode` configuration.
//!
//! Keeps `extensions.json`, `settings.json` and `launch.json` converged with
//! what the external editor needs for a generated C# solution. Each file is
//! reconciled independently; a failure on one never stops the others.
//!
//! Dropping an empty `.vscode/.vstupatchdisable` file into a project turns
//! off patching of existing files (missing files are still created).

mod templates;


pub use templates::{extensions_file, launch_file, settings_file};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{BridgeError, Result};
use crate::reconcile::{ensure_file, ReconcileOutcome};

/// Directory holding the managed files, relative to the project root.
pub const VSCODE_DIR: &str = ".vscode";

/// Marker file that disables patching of existing files.
pub const PATCH_DISABLE_MARKER: &str = ".vstupatchdisable";

/// Recommended extension written into `extensions.json` by default.
pub const DEFAULT_EXTENSION_ID: &str = "visualstudiotoolsforunity.vstuc";

/// Debugger type of the attach configuration in `launch.json` by default.
pub const DEFAULT_DEBUGGER_TYPE: &str = "vstuc";

pub const EXTENSIONS_FILE: &str = "extensions.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LAUNCH_FILE: &str = "launch.json";

/// Inputs for [`reconcile_project_config`].
#[derive(Debug, Clone)]
pub struct ProjectConfigOptions {
    /// File name of the generated solution (no directory part).
    pub solution_file: String,
    pub extension_id: String,
    pub debugger_type: String,
    /// When false, existing files are never rewritten.
    pub patch_existing: bool,
}

impl ProjectConfigOptions {
    pub fn new(solution_file: impl Into<String>) -> Self {
        Self {
            solution_file: solution_file.into(),
            extension_id: DEFAULT_EXTENSION_ID.to_string(),
            debugger_type: DEFAULT_DEBUGGER_TYPE.to_string(),
            patch_existing: true,
        }
    }
}

/// Outcome per managed file.
#[derive(Debug)]
pub struct ProjectConfigReport {
    pub vscode_dir: PathBuf,
    pub extensions: ReconcileOutcome,
    pub settings: ReconcileOutcome,
    pub launch: ReconcileOutcome,
}

impl ProjectConfigReport {
    /// File name and outcome pairs, in reconciliation order.
    pub fn entries(&self) -> [(&'static str, &ReconcileOutcome); 3] {
        [
            (EXTENSIONS_FILE, &self.extensions),
            (SETTINGS_FILE, &self.settings),
            (LAUNCH_FILE, &self.launch),
        ]
    }
}

/// Create or patch the managed `.vscode` files of `project_root`.
pub fn reconcile_project_config(
    project_root: &Path,
    options: &ProjectConfigOptions,
) -> ProjectConfigReport {
    let vscode_dir = project_root.join(VSCODE_DIR);

    if let Err(e) = fs::create_dir_all(&vscode_dir) {
        warn!(path = %vscode_dir.display(), error = %e, "cannot create .vscode directory");
        let failed = || {
            ReconcileOutcome::Failed(BridgeError::IoError(format!(
                "failed to create '{}': {}",
                vscode_dir.display(),
                e
            )))
        };
        return ProjectConfigReport {
            extensions: failed(),
            settings: failed(),
            launch: failed(),
            vscode_dir,
        };
    }

    let patch_existing = options.patch_existing && !vscode_dir.join(PATCH_DISABLE_MARKER).exists();
    if !patch_existing {
        debug!(path = %vscode_dir.display(), "patching of existing files is disabled");
    }

    let extensions = ensure_file(
        &vscode_dir.join(EXTENSIONS_FILE),
        &extensions_file(&options.extension_id),
        patch_existing,
    );
    let settings = ensure_file(
        &vscode_dir.join(SETTINGS_FILE),
        &settings_file(&options.solution_file),
        patch_existing,
    );
    let launch = ensure_file(
        &vscode_dir.join(LAUNCH_FILE),
        &launch_file(&options.debugger_type),
        patch_existing,
    );

    ProjectConfigReport {
        vscode_dir,
        extensions,
        settings,
        launch,
    }
}

/// Pick the solution file name for `project_root`.
///
/// An explicit name wins (only its final component is kept). Otherwise the
/// single `*.sln` in the project root is used, falling back to
/// `<project dir name>.sln`.
pub fn resolve_solution_file(project_root: &Path, explicit: Option<&str>) -> Result<String> {
    if let Some(explicit) = explicit {
        return Path::new(explicit)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| BridgeError::UserError(format!("invalid solution name '{}'", explicit)));
    }

    let entries = fs::read_dir(project_root).map_err(|e| {
        BridgeError::UserError(format!(
            "failed to read project directory '{}': {}",
            project_root.display(),
            e
        ))
    })?;

    let mut solutions: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.to_ascii_lowercase().ends_with(".sln"))
        .collect();

    if solutions.len() == 1 {
        return Ok(solutions.remove(0));
    }

    let dir_name = project_root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .ok_or_else(|| {
            BridgeError::UserError(format!(
                "cannot derive a solution name from '{}'; pass --solution",
                project_root.display()
            ))
        })?;

    Ok(format!("{}.sln", dir_name))
}
