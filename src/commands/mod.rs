//! Command implementations for ide-bridge.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod discover;
mod open;
mod sync;

use crate::cli::Command;
use crate::config::Config;
use crate::discovery::{find_editor, EditorSpec, EDITORS};
use crate::error::{BridgeError, Result};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Editors => discover::cmd_editors(),
        Command::Discover(args) => discover::cmd_discover(args, config),
        Command::Probe(args) => discover::cmd_probe(args),
        Command::Analyzers(args) => discover::cmd_analyzers(args, config),
        Command::Sync(args) => sync::cmd_sync(args, config),
        Command::Open(args) => open::cmd_open(args, config),
    }
}

/// The editors selected by an optional `--editor` value.
fn selected_editors(name: Option<&str>) -> Result<Vec<EditorSpec>> {
    match name {
        Some(name) => find_editor(name)
            .map(|editor| vec![*editor])
            .ok_or_else(|| unknown_editor(name)),
        None => Ok(EDITORS.to_vec()),
    }
}

fn unknown_editor(name: &str) -> BridgeError {
    let known: Vec<&str> = EDITORS.iter().map(|e| e.id).collect();
    BridgeError::UserError(format!(
        "unknown editor '{}' (supported: {})",
        name,
        known.join(", ")
    ))
}
