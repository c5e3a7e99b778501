//! Error types for form construction

use crate::director::Recipe;

/// Errors raised while orchestrating a build
///
/// Builder steps themselves cannot fail; only the Director's precondition
/// and recipe lookup can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A recipe was requested before any builder was set
    #[error("no builder set for recipe '{recipe}'")]
    NoBuilder {
        /// The recipe that was requested
        recipe: Recipe,
    },

    /// Recipe name did not match a known recipe
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),
}

impl FormError {
    /// Check if the error is a missing-builder precondition failure
    #[inline]
    #[must_use]
    pub fn is_missing_builder(&self) -> bool {
        matches!(self, Self::NoBuilder { .. })
    }
}
