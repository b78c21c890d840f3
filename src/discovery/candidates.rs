//! Candidate install paths per platform.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use globset::Glob;
use regex::Regex;
use tracing::debug;

use super::editors::EditorSpec;
use super::platform::{Platform, SearchEnv};

static DESKTOP_EXEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Exec=(\S+)").expect("valid desktop Exec regex"));

/// Paths worth probing for `editor` on `platform`, in search order.
///
/// May contain duplicates; callers de-duplicate.
pub fn list_candidate_paths(editor: &EditorSpec, platform: Platform, env: &SearchEnv) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    match platform {
        Platform::Windows => {
            let exe = format!("{}.exe", editor.install_dir_name);
            let programs = env.local_app_data.as_ref().map(|dir| dir.join("Programs"));
            for base in programs.iter().chain(env.program_files.iter()) {
                candidates.push(base.join(editor.install_dir_name).join(&exe));
            }
        }
        Platform::MacOs => {
            if let Some(applications) = &env.applications_dir {
                candidates.extend(app_bundles(applications, editor.install_dir_name));
                if let Some(app) = editor.mac_default_app {
                    candidates.push(applications.join(app));
                }
            }
        }
        Platform::Linux => {
            for dir in &env.linux_bin_dirs {
                candidates.push(dir.join(editor.executable_name));
            }
            candidates.extend(desktop_exec_candidate(
                &env.xdg_data_dirs,
                editor.linux_desktop_file,
            ));
        }
    }

    candidates.extend(env.extra_paths.iter().cloned());
    candidates
}

/// Directories in `applications` named `<prefix>*.app`, sorted.
fn app_bundles(applications: &Path, prefix: &str) -> Vec<PathBuf> {
    let matcher = match Glob::new(&format!("{}*.app", prefix)) {
        Ok(glob) => glob.compile_matcher(),
        Err(e) => {
            debug!(prefix, error = %e, "invalid app bundle glob");
            return Vec::new();
        }
    };

    let Ok(entries) = fs::read_dir(applications) else {
        return Vec::new();
    };

    let mut bundles: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir() && matcher.is_match(entry.file_name()))
        .map(|entry| entry.path())
        .collect();
    bundles.sort();
    bundles
}

/// The `Exec=` binary of the first readable `applications/<desktop_file>`
/// found under `data_dirs`.
fn desktop_exec_candidate(data_dirs: &[PathBuf], desktop_file: &str) -> Option<PathBuf> {
    for dir in data_dirs {
        let path = dir.join("applications").join(desktop_file);
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        if let Some(exec) = parse_desktop_exec(&content) {
            debug!(desktop_file = %path.display(), exec = %exec.display(), "found desktop entry");
            return Some(exec);
        }
    }

    None
}

/// First `Exec=` program in desktop entry text, without its arguments.
pub fn parse_desktop_exec(content: &str) -> Option<PathBuf> {
    DESKTOP_EXEC
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| PathBuf::from(m.as_str()))
}
