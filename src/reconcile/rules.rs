//! Desired entries and exclusion rules.

use regex::Regex;
use serde_json::Value;

/// A fact the reconciler guarantees is present after a patch.
#[derive(Debug, Clone, PartialEq)]
pub enum DesiredEntry {
    /// The array at top-level key `container` contains `value`.
    ArrayMember { container: String, value: Value },

    /// The array at top-level key `container` contains an object whose
    /// `match_key` field equals the one in `value`. If none does, `value`
    /// is appended.
    ArrayObject {
        container: String,
        match_key: String,
        value: Value,
    },

    /// Top-level `key` maps to exactly `value`.
    KeyValue { key: String, value: Value },
}

impl DesiredEntry {
    pub fn array_member(container: &str, value: impl Into<Value>) -> Self {
        DesiredEntry::ArrayMember {
            container: container.to_string(),
            value: value.into(),
        }
    }

    pub fn array_object(container: &str, match_key: &str, value: Value) -> Self {
        DesiredEntry::ArrayObject {
            container: container.to_string(),
            match_key: match_key.to_string(),
            value,
        }
    }

    pub fn key_value(key: &str, value: impl Into<Value>) -> Self {
        DesiredEntry::KeyValue {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Removes superseded entries from the map at top-level key `container`.
///
/// Only entries whose key matches `pattern` and whose value is active
/// (`true` or `"true"`) are removed. A disabled entry (`false`) or an
/// object-valued condition is kept.
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    pub container: String,
    pub pattern: Regex,
}

impl ExclusionRule {
    pub fn new(container: &str, pattern: Regex) -> Self {
        Self {
            container: container.to_string(),
            pattern,
        }
    }

    /// Returns true if the entry `key: value` should be removed.
    pub fn matches(&self, key: &str, value: &Value) -> bool {
        is_active(value) && self.pattern.is_match(key)
    }
}

fn is_active(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}
