//! Default contents and reconciliation rules for the managed `.vscode` files.

use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::reconcile::{DesiredEntry, ExclusionRule, ManagedFile};

/// Wildcard `files.exclude` patterns that hide solution and project files.
///
/// Literal names such as `MyGame.sln` are not matched.
static SOLUTION_EXCLUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*\*[\\/])?\*\.(sln|csproj)$").expect("valid solution exclude regex")
});

/// Patterns hidden from the explorer in a freshly created `settings.json`.
const FILES_EXCLUDE: &[&str] = &[
    "**/.DS_Store",
    "**/.git",
    "**/.vs",
    "**/.gitmodules",
    "**/.vsconfig",
    "**/*.booproj",
    "**/*.pidb",
    "**/*.suo",
    "**/*.user",
    "**/*.userprefs",
    "**/*.unityproj",
    "**/*.dll",
    "**/*.exe",
    "**/*.pdf",
    "**/*.mid",
    "**/*.midi",
    "**/*.wav",
    "**/*.gif",
    "**/*.ico",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.png",
    "**/*.psd",
    "**/*.tga",
    "**/*.tif",
    "**/*.tiff",
    "**/*.3ds",
    "**/*.3DS",
    "**/*.fbx",
    "**/*.FBX",
    "**/*.lxo",
    "**/*.LXO",
    "**/*.ma",
    "**/*.MA",
    "**/*.obj",
    "**/*.OBJ",
    "**/*.asset",
    "**/*.cubemap",
    "**/*.flare",
    "**/*.mat",
    "**/*.meta",
    "**/*.prefab",
    "**/*.unity",
    "build/",
    "Build/",
    "Library/",
    "library/",
    "obj/",
    "Obj/",
    "Logs/",
    "logs/",
    "ProjectSettings/",
    "UserSettings/",
    "temp/",
    "Temp/",
];

/// Asset types VS Code should open as YAML.
const YAML_ASSOCIATIONS: &[&str] = &["*.asset", "*.meta", "*.prefab", "*.unity"];

/// `extensions.json`: the tool extension must be recommended.
pub fn extensions_file(extension_id: &str) -> ManagedFile {
    ManagedFile {
        default_content: format!(
            "{{\n    \"recommendations\": [\n      {}\n    ]\n}}",
            json!(extension_id)
        ),
        desired: vec![DesiredEntry::array_member("recommendations", extension_id)],
        exclusions: Vec::new(),
    }
}

/// `settings.json`: the default solution must point at `solution_file`, and
/// wildcard excludes that would hide it are dropped.
pub fn settings_file(solution_file: &str) -> ManagedFile {
    let mut content = String::from("{\n    \"files.exclude\": {\n");
    push_entries(&mut content, FILES_EXCLUDE.iter().map(|p| (*p, json!(true))));
    content.push_str("    },\n    \"files.associations\": {\n");
    push_entries(
        &mut content,
        YAML_ASSOCIATIONS.iter().map(|p| (*p, json!("yaml"))),
    );
    content.push_str("    },\n");
    content.push_str("    \"explorer.fileNesting.enabled\": true,\n");
    content.push_str("    \"explorer.fileNesting.patterns\": {\n");
    push_entries(&mut content, [("*.sln", json!("*.csproj"))].into_iter());
    content.push_str("    },\n");
    content.push_str(&format!(
        "    \"dotnet.defaultSolution\": {}\n}}",
        json!(solution_file)
    ));

    ManagedFile {
        default_content: content,
        desired: vec![DesiredEntry::key_value(
            "dotnet.defaultSolution",
            solution_file,
        )],
        exclusions: vec![ExclusionRule::new(
            "files.exclude",
            SOLUTION_EXCLUDE.clone(),
        )],
    }
}

/// `launch.json`: one attach configuration of `debugger_type` must exist.
pub fn launch_file(debugger_type: &str) -> ManagedFile {
    let configuration = attach_configuration(debugger_type);
    let mut configuration_text = String::new();
    for (i, line) in serde_json::to_string_pretty(&configuration)
        .unwrap_or_default()
        .lines()
        .enumerate()
    {
        if i > 0 {
            configuration_text.push('\n');
        }
        configuration_text.push_str("        ");
        configuration_text.push_str(line);
    }

    ManagedFile {
        default_content: format!(
            "{{\n    \"version\": \"0.2.0\",\n    \"configurations\": [\n{}\n    ]\n}}",
            configuration_text
        ),
        desired: vec![DesiredEntry::array_object(
            "configurations",
            "type",
            configuration,
        )],
        exclusions: Vec::new(),
    }
}

fn attach_configuration(debugger_type: &str) -> serde_json::Value {
    json!({
        "name": "Attach to Unity",
        "type": debugger_type,
        "request": "attach"
    })
}

fn push_entries<'a>(
    content: &mut String,
    entries: impl ExactSizeIterator<Item = (&'a str, serde_json::Value)>,
) {
    let last = entries.len().saturating_sub(1);
    for (i, (key, value)) in entries.enumerate() {
        content.push_str(&format!("        {}: {}", json!(key), value));
        content.push_str(if i == last { "\n" } else { ",\n" });
    }
}
