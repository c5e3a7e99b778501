//! `form-builder` binary: one subcommand per form action.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use form_cli::{demo, init_tracing, list_recipes, show_form, OutputFormat, RenderConfig};
use form_core::Recipe;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("form-builder")
        .version(form_cli::VERSION)
        .about("Build product forms with the Builder/Director recipes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(value_parser!(OutputFormat))
                .help("Output format (overrides config file)"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Spaces per nesting level in text output"),
        )
        .arg(
            Arg::new("no-types")
                .long("no-types")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Hide type tags in text output"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML render config"),
        )
        .subcommand(Command::new("basic").about("Show the basic (minimal viable) form"))
        .subcommand(Command::new("full").about("Show the full-featured form"))
        .subcommand(Command::new("recipes").about("List recipes and their steps"))
        .subcommand(Command::new("demo").about("Run every recipe, then a custom sequence"))
}

fn render_config(matches: &ArgMatches) -> anyhow::Result<RenderConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            RenderConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(format) = matches.get_one::<OutputFormat>("format") {
        config = config.with_format(*format);
    }
    if let Some(indent) = matches.get_one::<usize>("indent") {
        config = config.with_indent(*indent);
    }
    if matches.get_flag("no-types") {
        config = config.with_show_types(false);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_tracing("warn");

    let matches = cli().get_matches();
    let config = render_config(&matches)?;
    tracing::debug!(?config, "resolved render config");

    let output = match matches.subcommand() {
        Some(("basic", _)) => show_form(Recipe::MinimalViable, &config)?,
        Some(("full", _)) => show_form(Recipe::FullFeatured, &config)?,
        Some(("recipes", _)) => list_recipes(&config)?,
        Some(("demo", _)) => demo(&config)?,
        _ => unreachable!("subcommand_required is set"),
    };

    print!("{output}");
    Ok(())
}
