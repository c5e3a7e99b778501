//! Director and recipes
//!
//! A [`Recipe`] is a fixed, ordered list of builder [`Step`]s. The
//! [`Director`] borrows whichever [`FormBuilder`] it is given and replays a
//! recipe against it; it never owns the builder or the product.
//!
//! ```rust
//! use form_core::{Director, FormBuilder, ProductFormBuilder};
//!
//! let mut builder = ProductFormBuilder::new();
//! let mut director = Director::new();
//! director.set_builder(&mut builder);
//! director.build_full_featured_product().unwrap();
//!
//! let product = builder.get_product();
//! assert_eq!(product.field_names(), vec!["name", "price", "stock", "details"]);
//! ```

use crate::builder::FormBuilder;
use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single builder step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// [`FormBuilder::produce_name`]
    Name,

    /// [`FormBuilder::produce_price`]
    Price,

    /// [`FormBuilder::produce_stock`]
    Stock,

    /// [`FormBuilder::produce_children`]
    Children,
}

impl Step {
    /// Every step, in declaration order
    pub const ALL: [Step; 4] = [Step::Name, Step::Price, Step::Stock, Step::Children];

    /// Invoke this step on `builder`
    pub fn apply(self, builder: &mut dyn FormBuilder) {
        match self {
            Self::Name => builder.produce_name(),
            Self::Price => builder.produce_price(),
            Self::Stock => builder.produce_stock(),
            Self::Children => builder.produce_children(),
        }
    }

    /// Step name as used in logs and listings
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "produce_name",
            Self::Price => "produce_price",
            Self::Stock => "produce_stock",
            Self::Children => "produce_children",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named construction sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recipe {
    /// Name only
    MinimalViable,

    /// Name, price, stock, then the grouped details
    FullFeatured,
}

impl Recipe {
    /// Every recipe
    pub const ALL: [Recipe; 2] = [Recipe::MinimalViable, Recipe::FullFeatured];

    /// Steps in the order the Director invokes them
    #[must_use]
    pub fn steps(&self) -> &'static [Step] {
        match self {
            Self::MinimalViable => &[Step::Name],
            Self::FullFeatured => &[Step::Name, Step::Price, Step::Stock, Step::Children],
        }
    }

    /// Canonical recipe name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MinimalViable => "minimal-viable",
            Self::FullFeatured => "full-featured",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" | "minimal-viable" | "basic" => Ok(Self::MinimalViable),
            "full" | "full-featured" => Ok(Self::FullFeatured),
            _ => Err(FormError::UnknownRecipe(s.to_string())),
        }
    }
}

/// Replays recipes against a borrowed builder
///
/// The Director holds at most one builder reference at a time and has no
/// other state. The builder keeps ownership of what it produced; read it
/// back with [`FormBuilder::get_product`].
#[derive(Debug, Default)]
pub struct Director<'b> {
    builder: Option<&'b mut dyn FormBuilder>,
}

impl<'b> Director<'b> {
    /// Create a director with no builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Create a director already pointed at `builder`
    #[inline]
    #[must_use]
    pub fn with_builder(builder: &'b mut dyn FormBuilder) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Replace the current builder
    pub fn set_builder(&mut self, builder: &'b mut dyn FormBuilder) {
        if self.builder.is_some() {
            tracing::trace!("replacing director builder");
        }
        self.builder = Some(builder);
    }

    /// Drop the builder reference, handing it back to the caller
    pub fn clear_builder(&mut self) -> Option<&'b mut dyn FormBuilder> {
        self.builder.take()
    }

    /// True if a builder has been set
    #[inline]
    #[must_use]
    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Run `recipe` against the current builder
    ///
    /// # Errors
    /// [`FormError::NoBuilder`] if no builder has been set.
    pub fn build(&mut self, recipe: Recipe) -> Result<(), FormError> {
        let builder = self
            .builder
            .as_deref_mut()
            .ok_or(FormError::NoBuilder { recipe })?;

        tracing::debug!(%recipe, steps = recipe.steps().len(), "running recipe");
        for step in recipe.steps() {
            step.apply(&mut *builder);
        }
        Ok(())
    }

    /// Invoke `produce_name` once
    ///
    /// # Errors
    /// [`FormError::NoBuilder`] if no builder has been set.
    pub fn build_minimal_viable_product(&mut self) -> Result<(), FormError> {
        self.build(Recipe::MinimalViable)
    }

    /// Invoke `produce_name`, `produce_price`, `produce_stock`,
    /// `produce_children`, in that order
    ///
    /// # Errors
    /// [`FormError::NoBuilder`] if no builder has been set.
    pub fn build_full_featured_product(&mut self) -> Result<(), FormError> {
        self.build(Recipe::FullFeatured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ProductFormBuilder;

    #[test]
    fn minimal_recipe_yields_name_only() {
        let mut builder = ProductFormBuilder::new();
        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.build_minimal_viable_product().unwrap();

        assert_eq!(builder.get_product().field_names(), vec!["name"]);
    }

    #[test]
    fn full_recipe_yields_four_top_level_fields() {
        let mut builder = ProductFormBuilder::new();
        Director::with_builder(&mut builder)
            .build_full_featured_product()
            .unwrap();

        let product = builder.get_product();
        assert_eq!(product.field_names(), vec!["name", "price", "stock", "details"]);
        assert!(product.fields()[3].is_group());
    }

    #[test]
    fn build_without_builder_fails() {
        let mut director = Director::new();
        assert!(!director.has_builder());
        assert_eq!(
            director.build_minimal_viable_product(),
            Err(FormError::NoBuilder {
                recipe: Recipe::MinimalViable
            })
        );
    }

    #[test]
    fn recipes_accumulate_on_same_builder() {
        let mut builder = ProductFormBuilder::new();
        let mut director = Director::with_builder(&mut builder);
        director.build_minimal_viable_product().unwrap();
        director.build_minimal_viable_product().unwrap();

        let builder = director.clear_builder().unwrap();
        assert_eq!(builder.get_product().field_names(), vec!["name", "name"]);
        assert!(!director.has_builder());
    }

    #[test]
    fn set_builder_replaces_previous() {
        let mut first = ProductFormBuilder::new();
        let mut second = ProductFormBuilder::new();

        let mut director = Director::new();
        director.set_builder(&mut first);
        director.set_builder(&mut second);
        director.build_full_featured_product().unwrap();

        assert!(first.get_product().is_empty());
        assert_eq!(second.get_product().len(), 4);
    }

    #[test]
    fn recipe_steps_are_fixed() {
        assert_eq!(Recipe::MinimalViable.steps(), &[Step::Name]);
        assert_eq!(Recipe::FullFeatured.steps(), &Step::ALL);
    }

    #[test]
    fn recipe_parses_aliases() {
        assert_eq!("basic".parse::<Recipe>(), Ok(Recipe::MinimalViable));
        assert_eq!("Minimal".parse::<Recipe>(), Ok(Recipe::MinimalViable));
        assert_eq!(" full ".parse::<Recipe>(), Ok(Recipe::FullFeatured));
        assert_eq!("full-featured".parse::<Recipe>(), Ok(Recipe::FullFeatured));
        assert_eq!(
            "deluxe".parse::<Recipe>(),
            Err(FormError::UnknownRecipe("deluxe".to_string()))
        );
    }

    #[test]
    fn recipe_display_round_trips_through_from_str() {
        for recipe in Recipe::ALL {
            assert_eq!(recipe.to_string().parse::<Recipe>(), Ok(recipe));
        }
    }
}
