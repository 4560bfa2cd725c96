//! Structural shape inference for loaded locale sets.
//!
//! A [`Shape`] is the inferred type of a message tree: the union of the
//! field names seen across every locale, with each field's value kind.
//! Shapes exist only while generating definitions and are never mutated
//! after being computed.

pub mod typescript;

use crate::messages::{LocaleSet, Message, MessageTree};

/// The inferred structural type of a message value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A string message.
    Text,
    /// An ordered array of strings.
    List,
    /// A nested object; fields keep first-seen order.
    Group(Vec<(String, Shape)>),
}

impl Shape {
    pub fn of(message: &Message) -> Shape {
        match message {
            Message::Text(_) => Shape::Text,
            Message::List(_) => Shape::List,
            Message::Group(tree) => infer_shape(tree),
        }
    }

    pub fn fields(&self) -> Option<&[(String, Shape)]> {
        match self {
            Shape::Group(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Infer the shape of a single message tree.
pub fn infer_shape(tree: &MessageTree) -> Shape {
    Shape::Group(
        tree.iter()
            .map(|(key, message)| (key.to_string(), Shape::of(message)))
            .collect(),
    )
}

/// Overlay `other` onto `base`.
///
/// Groups merge field-by-field; new fields are appended in the order the
/// overlaying locale declares them. When a field's kind differs between the
/// two sides, the overlaying side wins silently - a documented simplifying
/// assumption, not a conflict error.
pub fn merge_shapes(base: Shape, other: Shape) -> Shape {
    match (base, other) {
        (Shape::Group(base_fields), Shape::Group(other_fields)) => {
            let mut merged = base_fields;
            for (key, shape) in other_fields {
                match merged.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, existing)) => {
                        let current = std::mem::replace(existing, Shape::Text);
                        *existing = merge_shapes(current, shape);
                    }
                    None => merged.push((key, shape)),
                }
            }
            Shape::Group(merged)
        }
        (_, other) => other,
    }
}

/// Merge every locale's tree into one shape.
///
/// Locales are visited in sorted order (the order [`LocaleSet`] iterates),
/// so for conflicting kinds the lexicographically last locale wins and the
/// result is deterministic.
pub fn merged_shape(set: &LocaleSet) -> Shape {
    set.values().fold(Shape::Group(Vec::new()), |acc, locale| {
        merge_shapes(acc, infer_shape(&locale.messages))
    })
}
