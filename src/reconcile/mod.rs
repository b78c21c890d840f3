//! JSON configuration reconciliation.
//!
//! Converges a JSON config file toward a small desired state without
//! clobbering anything else a user put in it:
//!
//! - a missing file is created verbatim from its default content
//! - an existing file is parsed, patched in memory, and rewritten only when
//!   something actually changed
//! - entries are only ever removed when they match a known-superseded
//!   [`ExclusionRule`]
//! - a file that does not parse is left byte-for-byte untouched
//!
//! Every operation reports a [`ReconcileOutcome`] instead of an error, so
//! callers can log a skipped or failed file and carry on.

mod document;
mod engine;
mod rules;


pub use document::ConfigDocument;
pub use engine::{ensure_file, patch, ManagedFile};
pub use rules::{DesiredEntry, ExclusionRule};

use crate::error::BridgeError;
use std::fmt;

/// Why a reconciliation left an existing file alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file is not parseable JSON.
    Malformed(String),
    /// The document root is not a JSON object.
    NotAnObject,
    /// A container key holds a value of the wrong JSON type.
    ConflictingType { key: String },
    /// Patching of existing files is turned off for this project.
    PatchingDisabled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed(detail) => write!(f, "malformed JSON: {}", detail),
            SkipReason::NotAnObject => write!(f, "document root is not an object"),
            SkipReason::ConflictingType { key } => {
                write!(f, "'{}' has an unexpected type", key)
            }
            SkipReason::PatchingDisabled => write!(f, "patching disabled"),
        }
    }
}

/// Result of reconciling a single file.
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// The file did not exist and was written from its default content.
    Created,
    /// The file was rewritten; each string describes one change.
    Patched(Vec<String>),
    /// The file already satisfied every desired entry. Nothing was written.
    Unchanged,
    /// The file was left untouched on purpose.
    Skipped(SkipReason),
    /// A filesystem error stopped reconciliation of this file.
    Failed(BridgeError),
}

impl ReconcileOutcome {
    /// Returns true if this outcome wrote to disk.
    pub fn wrote(&self) -> bool {
        matches!(self, ReconcileOutcome::Created | ReconcileOutcome::Patched(_))
    }
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileOutcome::Created => write!(f, "created"),
            ReconcileOutcome::Patched(changes) => {
                write!(f, "patched ({})", changes.join("; "))
            }
            ReconcileOutcome::Unchanged => write!(f, "unchanged"),
            ReconcileOutcome::Skipped(reason) => write!(f, "skipped: {}", reason),
            ReconcileOutcome::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}
