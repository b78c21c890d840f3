//! `resources/app/package.json` manifests shipped inside editor installs.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// The fields read from an editor's `package.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Manifest {
    /// Read a manifest, returning `None` if it is missing or unreadable.
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Numeric version, ignoring any `-suffix`.
    pub fn editor_version(&self) -> Option<EditorVersion> {
        let version = self.version.as_deref()?;
        EditorVersion::parse(version.split('-').next().unwrap_or(version))
    }

    /// True for insider builds.
    pub fn is_insider(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| v.to_ascii_lowercase().contains("insider"))
    }
}

/// `major.minor.patch`; a missing patch is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EditorVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EditorVersion {
    /// Parse two to four dot-separated numbers; a fourth is dropped.
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<u32> = text
            .trim()
            .split('.')
            .map(|part| part.parse().ok())
            .collect::<Option<_>>()?;

        match parts.as_slice() {
            [major, minor] => Some(Self {
                major: *major,
                minor: *minor,
                patch: 0,
            }),
            [major, minor, patch] | [major, minor, patch, _] => Some(Self {
                major: *major,
                minor: *minor,
                patch: *patch,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for EditorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for EditorVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
