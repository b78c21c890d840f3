//! `open`: launch an editor on the project, optionally at a file position.

use tracing::debug;

use crate::cli::OpenArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::discovery::{
    discover_installations, probe, Installation, Platform, SearchEnv, EDITORS,
};
use crate::error::{BridgeError, Result};
use crate::launch::{plan, LaunchRequest};

use super::selected_editors;

pub(super) fn cmd_open(args: OpenArgs, config: &Config) -> Result<()> {
    let platform = Platform::current();
    let ctx = ProjectContext::resolve(args.project.as_deref(), None)?;
    let installation = select_installation(&args, config, platform)?;
    debug!(editor = installation.editor, path = %installation.path.display(), "selected installation");

    let request = LaunchRequest {
        install_path: &installation.path,
        platform,
        project_dir: &ctx.project_root,
        file: args.file.as_deref(),
        line: args.line,
        column: args.column,
    };
    let launch = plan(&request);

    if args.dry_run {
        println!("{}", launch.command_line());
        return Ok(());
    }

    launch.spawn()?;
    println!("Opened {} in {}", ctx.project_root.display(), installation.display_name);
    Ok(())
}

/// `--install` wins; otherwise the first installation of `--editor`, the
/// configured default editor, or any editor.
fn select_installation(
    args: &OpenArgs,
    config: &Config,
    platform: Platform,
) -> Result<Installation> {
    if let Some(path) = &args.install {
        return EDITORS
            .iter()
            .find_map(|editor| probe(editor, path, platform))
            .ok_or_else(|| {
                BridgeError::NotFound(format!(
                    "'{}' is not a recognized editor installation",
                    path.display()
                ))
            });
    }

    let wanted = args.editor.as_deref().or(config.default_editor.as_deref());
    let editors = selected_editors(wanted)?;
    let env = SearchEnv::from_system().with_extra_paths(config.extra_search_paths());

    discover_installations(&editors, platform, &env)
        .into_iter()
        .next()
        .ok_or_else(|| match wanted {
            Some(name) => BridgeError::NotFound(format!("no installation of '{}' found", name)),
            None => BridgeError::NotFound("no supported editor is installed".to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn open_args(project: PathBuf, install: Option<PathBuf>) -> OpenArgs {
        OpenArgs {
            file: None,
            project: Some(project),
            editor: None,
            install,
            line: 1,
            column: 0,
            dry_run: true,
        }
    }

    #[test]
    fn unrecognized_install_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let args = open_args(
            temp_dir.path().to_path_buf(),
            Some(temp_dir.path().join("nano")),
        );

        let err = cmd_open(args, &Config::default()).unwrap_err();
        assert!(matches!(err, BridgeError::NotFound(_)));
    }

    #[test]
    fn unknown_editor_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = open_args(temp_dir.path().to_path_buf(), None);
        args.editor = Some("notepad".to_string());

        let err = cmd_open(args, &Config::default()).unwrap_err();
        assert!(matches!(err, BridgeError::UserError(_)));
    }

    #[test]
    fn unknown_default_editor_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = open_args(temp_dir.path().to_path_buf(), None);
        let config = Config {
            default_editor: Some("notepad".to_string()),
            ..Config::default()
        };

        let err = cmd_open(args, &config).unwrap_err();
        assert!(matches!(err, BridgeError::UserError(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn dry_run_with_explicit_install() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("cursor");
        fs::write(&exe, "").unwrap();
        let mut args = open_args(temp_dir.path().to_path_buf(), Some(exe.clone()));
        args.file = Some(PathBuf::from("Assets/Player.cs"));
        args.line = 12;

        let installation =
            select_installation(&args, &Config::default(), Platform::Linux).unwrap();
        assert_eq!(installation.editor, "cursor");
        assert_eq!(installation.path, exe);

        cmd_open(args, &Config::default()).unwrap();
    }
}
