//! Form CLI - command-line front end for the form builder
//!
//! Stands in for a UI: each subcommand triggers one form action and prints
//! the rendered result.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod commands;
pub mod config;
pub mod render;

pub use commands::{demo, list_recipes, show_form, CommandError};
pub use config::{ConfigError, OutputFormat, RenderConfig};
pub use render::{render, RenderError, TextView};

/// Install the global tracing subscriber
///
/// Honours `RUST_LOG`, falling back to `default_filter`. Logs go to stderr
/// so rendered output on stdout stays clean.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
