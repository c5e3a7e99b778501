//! Subcommand bodies
//!
//! Each command returns the text to print so the binary stays a thin shell.

use crate::config::{OutputFormat, RenderConfig};
use crate::render::{render, RenderError};
use form_core::{Director, FormBuilder, FormError, FormSession, ProductFormBuilder, Recipe, Step};

/// Command errors
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Construction failed
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// Output could not be rendered
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Build the form for `recipe` and render it
///
/// # Errors
/// [`CommandError::Render`] if rendering fails.
pub fn show_form(recipe: Recipe, config: &RenderConfig) -> Result<String, CommandError> {
    let mut session = FormSession::connected();
    let product = session.show(recipe).unwrap_or_default();
    Ok(render(&product, config)?)
}

/// List every recipe with its steps
///
/// # Errors
/// [`CommandError::Render`] if JSON encoding fails.
pub fn list_recipes(config: &RenderConfig) -> Result<String, CommandError> {
    match config.format {
        OutputFormat::Text => {
            let mut out = String::new();
            for recipe in Recipe::ALL {
                let steps: Vec<&str> = recipe.steps().iter().map(Step::name).collect();
                out.push_str(&format!("{recipe}: {}\n", steps.join(", ")));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let listing: Vec<serde_json::Value> = Recipe::ALL
                .iter()
                .map(|recipe| {
                    serde_json::json!({
                        "recipe": recipe,
                        "steps": recipe.steps(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&listing).map_err(RenderError::from)?)
        }
    }
}

/// Walk through both recipes, then a hand-driven sequence, on one builder
///
/// # Errors
/// Propagates construction and rendering failures.
pub fn demo(config: &RenderConfig) -> Result<String, CommandError> {
    let mut builder = ProductFormBuilder::new();
    let mut out = String::new();

    for recipe in Recipe::ALL {
        Director::with_builder(&mut builder).build(recipe)?;
        out.push_str(&format!("{recipe}:\n"));
        out.push_str(&render(&builder.get_product(), config)?);
    }

    // Without a director: steps in any order the caller likes.
    builder.produce_name();
    builder.produce_stock();
    builder.produce_price();
    out.push_str("custom:\n");
    out.push_str(&render(&builder.get_product(), config)?);

    Ok(out)
}
