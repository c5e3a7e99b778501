//! Rendering of built forms
//!
//! Each descriptor becomes one line: groups as `[name]` headers, leaves as
//! `name <type> = "value"`. Children are indented under their group.

use crate::config::{OutputFormat, RenderConfig};
use form_core::{FieldDescriptor, Product};
use std::fmt;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON encoding failed
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `product` in the configured format
///
/// # Errors
/// [`RenderError::Json`] if JSON encoding fails.
pub fn render(product: &Product, config: &RenderConfig) -> Result<String, RenderError> {
    match config.format {
        OutputFormat::Text => Ok(TextView::new(product, config).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(product)?),
    }
}

/// Text listing of a product, one control per line
#[derive(Debug, Clone, Copy)]
pub struct TextView<'a> {
    product: &'a Product,
    config: &'a RenderConfig,
}

impl<'a> TextView<'a> {
    /// Create a view over `product`
    #[must_use]
    pub fn new(product: &'a Product, config: &'a RenderConfig) -> Self {
        Self { product, config }
    }

    fn write_control(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        field: &FieldDescriptor,
    ) -> fmt::Result {
        let pad = depth * self.config.indent;
        if field.is_group() {
            return writeln!(f, "{:pad$}[{}]", "", field.field);
        }

        write!(f, "{:pad$}{}", "", field.field)?;
        if self.config.show_types {
            if let Some(kind) = field.kind {
                write!(f, " <{kind}>")?;
            }
        }
        if let Some(value) = &field.value {
            write!(f, " = {value:?}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.product.is_empty() {
            return writeln!(f, "(no fields)");
        }
        for (depth, field) in self.product.walk() {
            self.write_control(f, depth, field)?;
        }
        Ok(())
    }
}
