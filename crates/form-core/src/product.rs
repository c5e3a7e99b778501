//! Accumulating product
//!
//! The ordered list of [`FieldDescriptor`]s a builder appends to. Serialises
//! as a bare JSON array.

use crate::field::{FieldDescriptor, Walk};
use serde::{Deserialize, Serialize};

/// Ordered sequence of field descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    fields: Vec<FieldDescriptor>,
}

impl Product {
    /// Create an empty product
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one descriptor
    #[inline]
    pub fn push(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Number of top-level descriptors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if nothing has been appended
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Top-level descriptors in append order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Iterate top-level descriptors
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    /// Consume into the underlying vector
    #[inline]
    #[must_use]
    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    /// Top-level field names in order
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    /// Pre-order walk over every descriptor, nested ones included
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(&self.fields)
    }
}

impl From<Vec<FieldDescriptor>> for Product {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }
}

impl Extend<FieldDescriptor> for Product {
    fn extend<I: IntoIterator<Item = FieldDescriptor>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for Product {
    type Item = FieldDescriptor;
    type IntoIter = std::vec::IntoIter<FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Product {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
