//! Launching an editor at a file position.
//!
//! The editor is opened on the project directory, or on its workspace file
//! when the directory holds exactly one `*.code-workspace`. A file position
//! is passed with `-g file:line:column`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use globset::Glob;
use tracing::{debug, info};

use crate::discovery::Platform;
use crate::error::{BridgeError, Result};

/// What to open, and where.
#[derive(Debug, Clone)]
pub struct LaunchRequest<'a> {
    /// Editor executable (Windows/Linux) or app bundle (macOS).
    pub install_path: &'a Path,
    pub platform: Platform,
    pub project_dir: &'a Path,
    pub file: Option<&'a Path>,
    /// 1-based; smaller values are clamped.
    pub line: i64,
    /// 0-based; negative values are clamped.
    pub column: i64,
}

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// Shell-quoted rendering, for `--dry-run` and logs.
    pub fn command_line(&self) -> String {
        shell_words::join(std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str)))
    }

    /// Start the editor without waiting for it.
    pub fn spawn(&self) -> Result<()> {
        info!(command = %self.command_line(), "launching editor");

        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|e| {
                BridgeError::LaunchError(format!("failed to start '{}': {}", self.program, e))
            })
    }
}

/// Clamp a position to 1-based line and 0-based column.
pub fn normalize_position(line: i64, column: i64) -> (i64, i64) {
    (line.max(1), column.max(0))
}

/// The only `*.code-workspace` file directly inside `dir`, if exactly one
/// exists.
pub fn find_workspace(dir: &Path) -> Option<PathBuf> {
    let matcher = Glob::new("*.code-workspace").ok()?.compile_matcher();

    let mut workspaces: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file() && matcher.is_match(entry.file_name()))
        .map(|entry| entry.path())
        .collect();

    if workspaces.len() == 1 {
        workspaces.pop()
    } else {
        debug!(dir = %dir.display(), count = workspaces.len(), "no unique workspace file");
        None
    }
}

/// Build the command line for `request`.
pub fn plan(request: &LaunchRequest<'_>) -> LaunchPlan {
    let target = find_workspace(request.project_dir)
        .unwrap_or_else(|| request.project_dir.to_path_buf());

    let mut editor_args = vec![target.display().to_string()];
    if let Some(file) = request.file {
        let (line, column) = normalize_position(request.line, request.column);
        editor_args.push("-g".to_string());
        editor_args.push(format!("{}:{}:{}", file.display(), line, column));
    }

    let install = request.install_path.display().to_string();
    match request.platform {
        Platform::MacOs => {
            let mut args = vec!["-n".to_string(), install, "--args".to_string()];
            args.extend(editor_args);
            LaunchPlan {
                program: "open".to_string(),
                args,
            }
        }
        Platform::Windows | Platform::Linux => LaunchPlan {
            program: install,
            args: editor_args,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request<'a>(project: &'a Path, file: Option<&'a Path>, line: i64, column: i64) -> LaunchRequest<'a> {
        LaunchRequest {
            install_path: Path::new("/usr/bin/cursor"),
            platform: Platform::Linux,
            project_dir: project,
            file,
            line,
            column,
        }
    }

    #[test]
    fn position_is_clamped() {
        assert_eq!(normalize_position(0, -1), (1, 0));
        assert_eq!(normalize_position(-10, -10), (1, 0));
        assert_eq!(normalize_position(42, 7), (42, 7));
    }

    #[test]
    fn opens_file_at_normalized_position() {
        let temp_dir = TempDir::new().unwrap();
        let file = Path::new("Assets/Foo.cs");

        let plan = plan(&request(temp_dir.path(), Some(file), 0, -1));

        assert_eq!(plan.program, "/usr/bin/cursor");
        assert_eq!(
            plan.args,
            vec![
                temp_dir.path().display().to_string(),
                "-g".to_string(),
                "Assets/Foo.cs:1:0".to_string(),
            ]
        );
    }

    #[test]
    fn opens_project_without_file() {
        let temp_dir = TempDir::new().unwrap();

        let plan = plan(&request(temp_dir.path(), None, 10, 3));

        assert_eq!(plan.args, vec![temp_dir.path().display().to_string()]);
    }

    #[test]
    fn single_workspace_file_is_the_target() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = temp_dir.path().join("Game.code-workspace");
        fs::write(&workspace, "{}").unwrap();

        let plan = plan(&request(temp_dir.path(), None, 1, 0));

        assert_eq!(plan.args, vec![workspace.display().to_string()]);
    }

    #[test]
    fn several_workspace_files_fall_back_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.code-workspace"), "{}").unwrap();
        fs::write(temp_dir.path().join("b.code-workspace"), "{}").unwrap();

        assert_eq!(find_workspace(temp_dir.path()), None);
    }

    #[test]
    fn nested_workspace_files_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("Tools");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("tools.code-workspace"), "{}").unwrap();

        assert_eq!(find_workspace(temp_dir.path()), None);
    }

    #[test]
    fn mac_launch_goes_through_open() {
        let temp_dir = TempDir::new().unwrap();
        let file = Path::new("/p/Assets/Foo.cs");
        let request = LaunchRequest {
            install_path: Path::new("/Applications/Cursor.app"),
            platform: Platform::MacOs,
            project_dir: temp_dir.path(),
            file: Some(file),
            line: 12,
            column: 4,
        };

        let plan = plan(&request);

        assert_eq!(plan.program, "open");
        assert_eq!(
            plan.args,
            vec![
                "-n".to_string(),
                "/Applications/Cursor.app".to_string(),
                "--args".to_string(),
                temp_dir.path().display().to_string(),
                "-g".to_string(),
                "/p/Assets/Foo.cs:12:4".to_string(),
            ]
        );
    }

    #[test]
    fn command_line_quotes_spaces() {
        let plan = LaunchPlan {
            program: "/opt/Trae CN/trae-cn".to_string(),
            args: vec!["/home/dev/My Game".to_string()],
        };

        assert_eq!(plan.command_line(), "'/opt/Trae CN/trae-cn' '/home/dev/My Game'");
    }

    #[test]
    fn spawn_reports_missing_program() {
        let temp_dir = TempDir::new().unwrap();
        let plan = LaunchPlan {
            program: temp_dir.path().join("no-such-editor").display().to_string(),
            args: Vec::new(),
        };

        let err = plan.spawn().unwrap_err();
        assert!(matches!(err, BridgeError::LaunchError(_)));
    }
}
