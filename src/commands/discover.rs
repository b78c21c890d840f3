//! `editors`, `discover`, `probe` and `analyzers`.

use crate::cli::{AnalyzersArgs, DiscoverArgs, ProbeArgs};
use crate::config::Config;
use crate::discovery::{
    discover_installations, find_unity_extension, list_analyzers, probe, Installation, Platform,
    SearchEnv, EDITORS,
};
use crate::error::{BridgeError, Result};

use super::selected_editors;

pub(super) fn cmd_editors() -> Result<()> {
    println!("Supported editors:");
    for editor in EDITORS {
        println!("  {:<12} {}", editor.id, editor.display_name);
    }
    Ok(())
}

pub(super) fn cmd_discover(args: DiscoverArgs, config: &Config) -> Result<()> {
    let editors = selected_editors(args.editor.as_deref())?;
    let env = SearchEnv::from_system().with_extra_paths(config.extra_search_paths());

    let installations = discover_installations(&editors, Platform::current(), &env);

    if args.json {
        return print_json(&installations);
    }

    if installations.is_empty() {
        println!("No editor installations found.");
        return Ok(());
    }

    println!("Installations ({}):", installations.len());
    for installation in &installations {
        print_installation(installation);
    }
    Ok(())
}

pub(super) fn cmd_probe(args: ProbeArgs) -> Result<()> {
    let editors = selected_editors(args.editor.as_deref())?;
    let platform = Platform::current();

    let installation = editors
        .iter()
        .find_map(|editor| probe(editor, &args.path, platform))
        .ok_or_else(|| {
            BridgeError::NotFound(format!(
                "'{}' is not a recognized editor installation",
                args.path.display()
            ))
        })?;

    if args.json {
        return print_json(&installation);
    }

    print_installation(&installation);
    Ok(())
}

pub(super) fn cmd_analyzers(args: AnalyzersArgs, config: &Config) -> Result<()> {
    let home = dirs::home_dir()
        .ok_or_else(|| BridgeError::UserError("cannot determine home directory".to_string()))?;

    let extension = find_unity_extension(&home, args.prerelease, &config.extension_id)
        .ok_or_else(|| {
            BridgeError::NotFound(format!(
                "extension '{}' is not installed",
                config.extension_id
            ))
        })?;

    println!("Extension: {}", extension.display());
    let analyzers = list_analyzers(&extension);
    if analyzers.is_empty() {
        println!("No analyzers found.");
    }
    for analyzer in analyzers {
        println!("  {}", analyzer.display());
    }
    Ok(())
}

fn print_installation(installation: &Installation) {
    println!("  {}", installation.display_name);
    println!("    Editor:     {}", installation.editor);
    println!("    Path:       {}", installation.path.display());
    match installation.version {
        Some(version) => println!("    Version:    {}", version),
        None => println!("    Version:    unknown"),
    }
    if installation.is_prerelease {
        println!("    Prerelease: yes");
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BridgeError::UserError(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
