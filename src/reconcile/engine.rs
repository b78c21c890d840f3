//! EnsureFile / Patch.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::document::ConfigDocument;
use super::rules::{DesiredEntry, ExclusionRule};
use super::{ReconcileOutcome, SkipReason};
use crate::error::BridgeError;
use crate::fs::atomic_write_file;

/// A config file managed by the reconciler.
#[derive(Debug, Clone)]
pub struct ManagedFile {
    /// Content written verbatim when the file does not exist.
    pub default_content: String,
    pub desired: Vec<DesiredEntry>,
    pub exclusions: Vec<ExclusionRule>,
}

/// Create `path` from the default content, or patch it if it already exists.
///
/// With `patch_existing` off, an existing file is never read or written.
pub fn ensure_file(path: &Path, file: &ManagedFile, patch_existing: bool) -> ReconcileOutcome {
    if path.exists() {
        if !patch_existing {
            debug!(path = %path.display(), "patching disabled, leaving file as is");
            return ReconcileOutcome::Skipped(SkipReason::PatchingDisabled);
        }
        return patch(path, &file.desired, &file.exclusions);
    }

    match atomic_write_file(path, &file.default_content) {
        Ok(()) => {
            info!(path = %path.display(), "created config file");
            ReconcileOutcome::Created
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to create config file");
            ReconcileOutcome::Failed(err)
        }
    }
}

/// Converge an existing file toward `desired`, removing entries matched by
/// `exclusions`. Writes only if something changed.
pub fn patch(path: &Path, desired: &[DesiredEntry], exclusions: &[ExclusionRule]) -> ReconcileOutcome {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return skip(path, SkipReason::Malformed("file is not UTF-8".to_string()));
        }
        Err(e) => {
            return ReconcileOutcome::Failed(BridgeError::IoError(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let mut document = match ConfigDocument::parse(&text) {
        Ok(document) => document,
        Err(detail) => return skip(path, SkipReason::Malformed(detail)),
    };

    let Some(root) = document.root_object_mut() else {
        return skip(path, SkipReason::NotAnObject);
    };

    let changes = match apply(root, desired, exclusions) {
        Ok(changes) => changes,
        Err(reason) => return skip(path, reason),
    };

    if changes.is_empty() {
        debug!(path = %path.display(), "config file already converged");
        return ReconcileOutcome::Unchanged;
    }

    let written = document
        .to_pretty_string()
        .and_then(|content| atomic_write_file(path, &content));

    match written {
        Ok(()) => {
            info!(path = %path.display(), changes = changes.len(), "patched config file");
            ReconcileOutcome::Patched(changes)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to write patched config file");
            ReconcileOutcome::Failed(err)
        }
    }
}

fn skip(path: &Path, reason: SkipReason) -> ReconcileOutcome {
    warn!(path = %path.display(), %reason, "leaving config file untouched");
    ReconcileOutcome::Skipped(reason)
}

/// Apply entries then rules to `root`, returning one description per change.
///
/// Any type conflict aborts the whole patch; the caller discards `root`.
pub(super) fn apply(
    root: &mut Map<String, Value>,
    desired: &[DesiredEntry],
    exclusions: &[ExclusionRule],
) -> Result<Vec<String>, SkipReason> {
    let mut changes = Vec::new();

    for entry in desired {
        match entry {
            DesiredEntry::ArrayMember { container, value } => {
                let items = array_container(root, container, &mut changes)?;
                if !items.contains(value) {
                    items.push(value.clone());
                    changes.push(format!("added {} to '{}'", value, container));
                }
            }
            DesiredEntry::ArrayObject {
                container,
                match_key,
                value,
            } => {
                let wanted = value.get(match_key);
                let items = array_container(root, container, &mut changes)?;
                let present = items
                    .iter()
                    .any(|item| item.is_object() && item.get(match_key) == wanted);
                if !present {
                    items.push(value.clone());
                    changes.push(match wanted {
                        Some(id) => format!("added {} = {} entry to '{}'", match_key, id, container),
                        None => format!("added entry to '{}'", container),
                    });
                }
            }
            DesiredEntry::KeyValue { key, value } => {
                if root.get(key) != Some(value) {
                    root.insert(key.clone(), value.clone());
                    changes.push(format!("set '{}' to {}", key, value));
                }
            }
        }
    }

    for rule in exclusions {
        let Some(existing) = root.get_mut(&rule.container) else {
            continue;
        };
        let Some(map) = existing.as_object_mut() else {
            return Err(SkipReason::ConflictingType {
                key: rule.container.clone(),
            });
        };

        let stale: Vec<String> = map
            .iter()
            .filter(|(key, value)| rule.matches(key, value))
            .map(|(key, _)| key.clone())
            .collect();

        for key in stale {
            map.shift_remove(&key);
            changes.push(format!("removed '{}' from '{}'", key, rule.container));
        }
    }

    Ok(changes)
}

fn array_container<'a>(
    root: &'a mut Map<String, Value>,
    key: &str,
    changes: &mut Vec<String>,
) -> Result<&'a mut Vec<Value>, SkipReason> {
    if !root.contains_key(key) {
        root.insert(key.to_string(), Value::Array(Vec::new()));
        changes.push(format!("created '{}'", key));
    }

    root.get_mut(key)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| SkipReason::ConflictingType {
            key: key.to_string(),
        })
}
