//! `sync`: converge the project's `.vscode` files.

use crate::cli::SyncArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::vscode::{reconcile_project_config, ProjectConfigOptions, ProjectConfigReport};

pub(super) fn cmd_sync(args: SyncArgs, config: &Config) -> Result<()> {
    let ctx = ProjectContext::resolve(args.project.as_deref(), args.solution.as_deref())?;
    let report = sync_project(&ctx, config);

    println!("Synced {}", report.vscode_dir.display());
    println!("Solution: {}", ctx.solution_file);
    for (name, outcome) in report.entries() {
        println!("  {:<16} {}", name, outcome);
    }

    // Per-file failures are reported above but never fail the command.
    Ok(())
}

fn sync_project(ctx: &ProjectContext, config: &Config) -> ProjectConfigReport {
    let options = ProjectConfigOptions {
        solution_file: ctx.solution_file.clone(),
        extension_id: config.extension_id.clone(),
        debugger_type: config.debugger_type.clone(),
        patch_existing: config.patch_existing,
    };
    reconcile_project_config(&ctx.project_root, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::{ReconcileOutcome, SkipReason};
    use crate::test_support::unity_project;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sync_uses_config_values() {
        let temp_dir = unity_project(&["Shooter.sln"]);
        let ctx = ProjectContext::resolve(Some(temp_dir.path()), None).unwrap();
        let config = Config {
            extension_id: "acme.unity".to_string(),
            ..Config::default()
        };

        let report = sync_project(&ctx, &config);

        assert!(matches!(report.extensions, ReconcileOutcome::Created));
        let settings: Value = serde_json::from_str(
            &fs::read_to_string(ctx.vscode_dir().join("settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(settings["dotnet.defaultSolution"], "Shooter.sln");
        let extensions = fs::read_to_string(ctx.vscode_dir().join("extensions.json")).unwrap();
        assert!(extensions.contains("acme.unity"));
    }

    #[test]
    fn sync_honors_patch_existing_off() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".vscode")).unwrap();
        fs::write(temp_dir.path().join(".vscode").join("launch.json"), "{}").unwrap();
        let ctx = ProjectContext::resolve(Some(temp_dir.path()), Some("Game.sln")).unwrap();
        let config = Config {
            patch_existing: false,
            ..Config::default()
        };

        let report = sync_project(&ctx, &config);

        assert!(matches!(
            report.launch,
            ReconcileOutcome::Skipped(SkipReason::PatchingDisabled)
        ));
    }

    #[test]
    fn cmd_sync_succeeds_on_fresh_project() {
        let temp_dir = TempDir::new().unwrap();
        let args = SyncArgs {
            project: Some(temp_dir.path().to_path_buf()),
            solution: Some("Game.sln".to_string()),
        };

        cmd_sync(args, &Config::default()).unwrap();

        assert!(temp_dir.path().join(".vscode").join("launch.json").exists());
    }
}
