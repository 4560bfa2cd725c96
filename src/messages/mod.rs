//! Message types for locale data.
//!
//! These types represent translation messages loaded from JSON locale files.
//! A value is always one of three kinds: a string, an ordered array of
//! strings, or a nested group of further messages. Anything else in a locale
//! file is rejected at load time.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single translated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A plain string message.
    Text(String),
    /// An ordered list of string messages. Order is preserved verbatim.
    List(Vec<String>),
    /// A nested group of messages.
    Group(MessageTree),
}

impl Message {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Message::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&MessageTree> {
        match self {
            Message::Group(tree) => Some(tree),
            _ => None,
        }
    }

    /// Human-readable kind name, as shown by `glossa list --verbose`.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Text(_) => "string",
            Message::List(_) => "string[]",
            Message::Group(_) => "group",
        }
    }
}

/// An ordered key/value tree of messages for one locale.
///
/// Keys keep the order they have in the source file, so everything derived
/// from a tree (including generated definitions) is stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageTree {
    entries: Vec<(String, Message)>,
}

impl MessageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Callers are expected to have resolved duplicate
    /// keys already (the JSON parser keeps the last value for a key).
    pub(crate) fn push(&mut self, key: impl Into<String>, message: Message) {
        self.entries.push((key.into(), message));
    }

    /// Get a message by a single key segment.
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, message)| message)
    }

    /// Resolve a dotted key path like `"Common.actions.save"`, descending
    /// through nested groups.
    pub fn lookup(&self, key_path: &str) -> Option<&Message> {
        let mut parts = key_path.split('.');
        let mut current = self.get(parts.next()?)?;
        for part in parts {
            current = current.as_group()?.get(part)?;
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in source-file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of direct entries (groups count as one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaf messages, counted through nested groups.
    pub fn leaf_count(&self) -> usize {
        self.iter()
            .map(|(_, message)| match message {
                Message::Group(tree) => tree.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    /// Flatten to `(dotted key path, leaf message)` pairs in source order.
    pub fn flatten(&self) -> Vec<(String, &Message)> {
        let mut result = Vec::new();
        self.flatten_into(String::new(), &mut result);
        result
    }

    fn flatten_into<'a>(&'a self, prefix: String, result: &mut Vec<(String, &'a Message)>) {
        for (key, message) in self.iter() {
            let key_path = if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", prefix, key)
            };
            match message {
                Message::Group(tree) => tree.flatten_into(key_path, result),
                leaf => result.push((key_path, leaf)),
            }
        }
    }
}

/// All messages for a single locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "zh-CN"), derived from the file stem.
    pub locale: String,
    /// File the messages were loaded from.
    pub file_path: PathBuf,
    /// The parsed message tree.
    pub messages: MessageTree,
}

impl LocaleMessages {
    pub fn new(
        locale: impl Into<String>,
        file_path: impl Into<PathBuf>,
        messages: MessageTree,
    ) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            messages,
        }
    }
}

/// All loaded locales, keyed by locale code.
///
/// A `BTreeMap` so that every cross-locale walk (listing, shape merging,
/// rendering) happens in sorted locale order.
pub type LocaleSet = BTreeMap<String, LocaleMessages>;
