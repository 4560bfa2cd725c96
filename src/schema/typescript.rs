//! TypeScript declaration output for merged locale shapes.
//!
//! The emitted file declares two interfaces: `Messages`, the merged
//! per-locale document shape (nested groups become inline object literal
//! types), and `Locales`, mapping each locale code to `Messages`. Output is
//! byte-identical for identical inputs: locales are walked in sorted order
//! and field order follows the source files.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::loader::load_locales;
use crate::messages::{LocaleSet, Message, MessageTree};

use super::{Shape, merged_shape};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

const INDENT: &str = "    ";

const HEADER: &str = "\
// This file was generated by glossa.
// Do not edit manually; it will be overwritten.

";

/// Options controlling the rendered declaration.
#[derive(Debug, Clone)]
pub struct TypeDefOptions {
    /// Prefix the output with a machine-generated file header comment.
    pub header: bool,
    /// Emit `(args: { name: string }) => string` for messages whose
    /// reference value contains `{name}`-style placeholders.
    pub placeholder_args: bool,
    /// Locale whose values feed doc comments and placeholder detection.
    /// Falls back to the first locale in sorted order when absent.
    pub primary_locale: String,
}

impl Default for TypeDefOptions {
    fn default() -> Self {
        Self {
            header: false,
            placeholder_args: false,
            primary_locale: "en".to_string(),
        }
    }
}

/// Load `dir` and write its type declaration to `out`, overwriting any
/// existing content.
pub fn generate_type_defs(
    dir: impl AsRef<Path>,
    out: impl AsRef<Path>,
    options: &TypeDefOptions,
) -> Result<()> {
    let set = load_locales(dir)?;
    let content = render_type_defs(&set, options);
    write_type_defs(out, &content)
}

/// Write rendered content to `out`.
///
/// The parent directory must already exist; it is not created implicitly.
pub fn write_type_defs(out: impl AsRef<Path>, content: &str) -> Result<()> {
    let out = out.as_ref();
    fs::write(out, content).map_err(|e| Error::Write {
        path: out.to_path_buf(),
        source: e,
    })
}

/// Render the declaration for a loaded locale set.
pub fn render_type_defs(set: &LocaleSet, options: &TypeDefOptions) -> String {
    let shape = merged_shape(set);
    let reference = reference_tree(set, &options.primary_locale);

    let mut out = String::new();
    if options.header {
        out.push_str(HEADER);
    }
    out.push_str("/* eslint-disable */\n");

    out.push_str("export interface Messages {\n");
    if let Some(fields) = shape.fields() {
        render_fields(fields, reference, options, 1, &mut out);
    }
    out.push_str("}\n\n");

    out.push_str("export interface Locales {\n");
    for locale in set.keys() {
        out.push_str(INDENT);
        out.push_str(&format!("{}: Messages;\n", ts_key(locale)));
    }
    out.push_str("}\n\n");

    out.push_str("export declare const locales: Locales;\n");
    out
}

/// The tree doc comments and placeholders are read from: the primary
/// locale when loaded, otherwise the first locale in sorted order.
fn reference_tree<'a>(set: &'a LocaleSet, primary_locale: &str) -> Option<&'a MessageTree> {
    set.get(primary_locale)
        .or_else(|| set.values().next())
        .map(|locale| &locale.messages)
}

fn render_fields(
    fields: &[(String, Shape)],
    reference: Option<&MessageTree>,
    options: &TypeDefOptions,
    depth: usize,
    out: &mut String,
) {
    let indent = INDENT.repeat(depth);
    for (key, shape) in fields {
        let value = reference.and_then(|tree| tree.get(key));

        match shape {
            Shape::Text => {
                if let Some(Message::Text(text)) = value {
                    push_doc_comment(text, &indent, out);
                    if options.placeholder_args {
                        let placeholders = extract_placeholders(text);
                        if !placeholders.is_empty() {
                            out.push_str(&format!(
                                "{}{}: (args: {{ {} }}) => string;\n",
                                indent,
                                ts_key(key),
                                placeholders
                                    .iter()
                                    .map(|p| format!("{}: string", p))
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            ));
                            continue;
                        }
                    }
                }
                out.push_str(&format!("{}{}: string;\n", indent, ts_key(key)));
            }
            Shape::List => {
                out.push_str(&format!("{}{}: string[];\n", indent, ts_key(key)));
            }
            Shape::Group(inner) => {
                let child_reference = value.and_then(Message::as_group);
                out.push_str(&format!("{}{}: {{\n", indent, ts_key(key)));
                render_fields(inner, child_reference, options, depth + 1, out);
                out.push_str(&format!("{}}};\n", indent));
            }
        }
    }
}

fn push_doc_comment(text: &str, indent: &str, out: &mut String) {
    let lines: Vec<&str> = text.lines().collect();
    match lines.as_slice() {
        [] => {}
        [line] => out.push_str(&format!("{}/** {} */\n", indent, line)),
        lines => {
            out.push_str(&format!("{}/**\n", indent));
            for line in lines {
                out.push_str(&format!("{} * {}\n", indent, line));
            }
            out.push_str(&format!("{} */\n", indent));
        }
    }
}

/// Placeholder names in first-occurrence order, deduplicated.
fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in PLACEHOLDER_REGEX.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            let name = name.as_str().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

fn ts_key(key: &str) -> String {
    format!("'{}'", key.replace('\\', "\\\\").replace('\'', "\\'"))
}
