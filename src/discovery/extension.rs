//! Locate the installed Unity tools extension and its Roslyn analyzers.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

/// Newest `<home>/.vscode[-insiders]/extensions/<extension_id>*` directory.
///
/// "Newest" is the greatest directory name, which orders versioned
/// extension folders like `publisher.name-1.2.3` correctly for equal-width
/// components.
pub fn find_unity_extension(home: &Path, prerelease: bool, extension_id: &str) -> Option<PathBuf> {
    let root = if prerelease { ".vscode-insiders" } else { ".vscode" };
    let extensions = home.join(root).join("extensions");

    fs::read_dir(&extensions)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(extension_id))
        })
        .map(|entry| entry.path())
        .max()
}

/// Every `*Analyzers.dll` under `<extension_dir>/Analyzers`, sorted.
pub fn list_analyzers(extension_dir: &Path) -> Vec<PathBuf> {
    let root = extension_dir.join("Analyzers");
    let Ok(glob) = Glob::new("*Analyzers.dll") else {
        return Vec::new();
    };
    let matcher = glob.compile_matcher();

    let mut found = Vec::new();
    collect_matching(&root, &matcher, &mut found);
    found.sort();
    found
}

fn collect_matching(dir: &Path, matcher: &GlobMatcher, found: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_matching(&path, matcher, found);
        } else if matcher.is_match(entry.file_name()) {
            found.push(path);
        }
    }
}
