//! Directory scanning and parsing for locale files.
//!
//! A locale directory is flat: one `<locale>.json` file per locale.
//! Sub-directories and files with other extensions are skipped silently.
//! Parsing is fail-fast: the first unreadable or malformed recognized file
//! aborts the whole load with an error naming that file, and no partial
//! result is returned.
//!
//! Loading has no cache and no shared state; every call re-reads the
//! directory. See [`crate::cache::LocaleCache`] for an explicit,
//! caller-owned caching layer.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::messages::{LocaleMessages, LocaleSet, Message, MessageTree};

/// File extension recognized as a locale file.
pub const LOCALE_EXTENSION: &str = "json";

/// Extracts the locale code from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every recognized locale file in `dir`.
///
/// An existing but empty directory yields an empty set; a missing directory
/// is an error.
pub fn load_locales(dir: impl AsRef<Path>) -> Result<LocaleSet> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(Error::DirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::Read {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut set = LocaleSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::Read {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(LOCALE_EXTENSION) {
            continue;
        }
        let Some(locale) = extract_locale(&path) else {
            continue;
        };

        let messages = parse_locale_file(&path)?;
        set.insert(locale.clone(), LocaleMessages::new(locale, path, messages));
    }

    Ok(set)
}

/// Load a single locale file into a message tree.
pub fn load_locale_file(path: impl AsRef<Path>) -> Result<MessageTree> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    parse_locale_file(path)
}

fn parse_locale_file(path: &Path) -> Result<MessageTree> {
    let content = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Deserializing straight into a map rejects non-object roots with a
    // serde error that names the actual type.
    let root: Map<String, Value> =
        serde_json::from_str(&content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    convert_object(&root, "", path)
}

fn convert_object(map: &Map<String, Value>, prefix: &str, path: &Path) -> Result<MessageTree> {
    let mut tree = MessageTree::new();
    for (key, value) in map {
        let key_path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        tree.push(key.clone(), convert_value(value, &key_path, path)?);
    }
    Ok(tree)
}

fn convert_value(value: &Value, key_path: &str, path: &Path) -> Result<Message> {
    match value {
        Value::String(s) => Ok(Message::Text(s.clone())),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => list.push(s.clone()),
                    other => {
                        return Err(Error::InvalidValue {
                            path: path.to_path_buf(),
                            key: format!("{}[{}]", key_path, i),
                            found: json_kind(other),
                        });
                    }
                }
            }
            Ok(Message::List(list))
        }
        Value::Object(map) => Ok(Message::Group(convert_object(map, key_path, path)?)),
        other => Err(Error::InvalidValue {
            path: path.to_path_buf(),
            key: key_path.to_string(),
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
