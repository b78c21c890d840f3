//! In-memory JSON document for a config file.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Value};

use crate::error::{BridgeError, Result};

/// Indentation used when a patched document is written back.
const INDENT: &[u8] = b"    ";

/// A parsed config file.
///
/// Object key order is kept as read, so a rewrite only moves what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Parse config text.
    ///
    /// Accepts the JSON-with-comments dialect VS Code itself writes, with or
    /// without a leading byte order mark. Numbers keep their literal text. The
    /// error is the parser's message; callers treat it as "leave the file
    /// alone".
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lenient: serde_json_lenient::Value =
            serde_json_lenient::from_str(text).map_err(|e| e.to_string())?;

        Ok(Self {
            root: into_json(lenient)?,
        })
    }

    /// The whole document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Mutable access to the root object, or `None` if the root is not one.
    pub fn root_object_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.root.as_object_mut()
    }

    /// Serialize with a fixed four-space indent and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.root.serialize(&mut serializer).map_err(|e| {
            BridgeError::IoError(format!("failed to serialize JSON document: {}", e))
        })?;
        buf.push(b'\n');

        String::from_utf8(buf)
            .map_err(|e| BridgeError::IoError(format!("serialized JSON is not UTF-8: {}", e)))
    }
}

fn into_json(value: serde_json_lenient::Value) -> std::result::Result<Value, String> {
    use serde_json_lenient::Value as Lenient;

    Ok(match value {
        Lenient::Null => Value::Null,
        Lenient::Bool(b) => Value::Bool(b),
        Lenient::Number(n) => {
            let literal = n.to_string();
            Value::Number(
                literal
                    .parse::<Number>()
                    .map_err(|e| format!("invalid number {}: {}", literal, e))?,
            )
        }
        Lenient::String(s) => Value::String(s),
        Lenient::Array(items) => Value::Array(
            items
                .into_iter()
                .map(into_json)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Lenient::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| into_json(value).map(|value| (key, value)))
                .collect::<std::result::Result<_, _>>()?,
        ),
    })
}
