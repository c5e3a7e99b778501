//! Field descriptors
//!
//! A [`FieldDescriptor`] describes one form input or a group of nested
//! inputs. Descriptors are plain data: the builder that produces them decides
//! their content, and a renderer decides how they look.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag carried by a leaf descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line free text
    Text,

    /// Numeric input
    Number,

    /// Email address
    Email,

    /// Multi-line free text
    Textarea,
}

impl FieldType {
    /// Lowercase tag as it appears on the wire
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form field, or a named group of nested fields
///
/// A descriptor is intended to be either a leaf (`value`/`kind` set) or a
/// group (`children` set). Nothing enforces this; [`FieldDescriptor::leaf`]
/// and [`FieldDescriptor::group`] are the intended entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name
    pub field: String,

    /// Initial display value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Input type tag
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldType>,

    /// Nested fields, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FieldDescriptor>>,
}

impl FieldDescriptor {
    /// Create a leaf field with an empty value
    #[must_use]
    pub fn leaf(field: impl Into<String>, kind: FieldType) -> Self {
        Self {
            field: field.into(),
            value: Some(String::new()),
            kind: Some(kind),
            children: None,
        }
    }

    /// Create a group holding `children` in order
    #[must_use]
    pub fn group(field: impl Into<String>, children: Vec<FieldDescriptor>) -> Self {
        Self {
            field: field.into(),
            value: None,
            kind: None,
            children: Some(children),
        }
    }

    /// Set the display value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// True if this descriptor carries nested fields
    #[inline]
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// True if this descriptor is a plain input
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.is_group()
    }

    /// Nested fields, empty for leaves
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[FieldDescriptor] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Depth-first, pre-order walk over this descriptor and its descendants
    ///
    /// Yields `(depth, descriptor)` with `self` at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Number of leaf inputs at or below this descriptor
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|(_, d)| d.is_leaf()).count()
    }
}

/// Pre-order iterator returned by [`FieldDescriptor::walk`]
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a FieldDescriptor)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn over(roots: &'a [FieldDescriptor]) -> Self {
        Self {
            stack: roots.iter().rev().map(|d| (0, d)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a FieldDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the first child is popped next.
        self.stack.extend(node.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
