//! UI-facing session
//!
//! [`FormSession`] is what a front end calls when the user asks for a form.
//! Until a builder has been connected, both actions are skipped and return
//! `None`.

use crate::builder::{FormBuilder, ProductFormBuilder};
use crate::director::{Director, Recipe};
use crate::product::Product;

/// The two user-triggered actions plus the builder they run against
#[derive(Debug, Default)]
pub struct FormSession {
    builder: Option<ProductFormBuilder>,
}

impl FormSession {
    /// Create a session with no builder connected yet
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that is ready to serve forms
    #[inline]
    #[must_use]
    pub fn connected() -> Self {
        Self {
            builder: Some(ProductFormBuilder::new()),
        }
    }

    /// Connect a fresh builder, replacing any existing one
    pub fn connect(&mut self) {
        self.builder = Some(ProductFormBuilder::new());
    }

    /// True once a builder is connected
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.builder.is_some()
    }

    /// "Show basic form" action
    pub fn show_basic_form(&mut self) -> Option<Product> {
        self.show(Recipe::MinimalViable)
    }

    /// "Show full form" action
    pub fn show_full_form(&mut self) -> Option<Product> {
        self.show(Recipe::FullFeatured)
    }

    /// Run `recipe` and return the fields to render
    ///
    /// Returns `None` without doing anything if no builder is connected.
    pub fn show(&mut self, recipe: Recipe) -> Option<Product> {
        let Some(builder) = self.builder.as_mut() else {
            tracing::debug!(%recipe, "no builder connected, skipping");
            return None;
        };

        let mut director = Director::with_builder(&mut *builder);
        if let Err(err) = director.build(recipe) {
            tracing::warn!(%err, "recipe failed");
            return None;
        }

        let product = builder.get_product();
        tracing::info!(%recipe, fields = product.len(), "form ready");
        Some(product)
    }
}
