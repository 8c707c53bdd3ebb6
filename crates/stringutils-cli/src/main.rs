//! stringutils CLI entry point.
//!
//! Exposes each library operation as a subcommand:
//! - `stringutils escape` / `unescape` - add or remove an escape character
//! - `stringutils split` / `join` - break text into pieces and back
//! - `stringutils int` - strict integer parsing
//! - `stringutils component` - extract one delimited component
//! - `stringutils template` - instantiate a `${name}` template

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_component, run_escape, run_indent, run_int, run_join, run_split, run_template, run_text,
    run_unescape, ComponentArgs, EscapeArgs, IndentArgs, IntArgs, JoinArgs, SplitArgs,
    TemplateArgs, TextArgs, TextOp, UnescapeArgs,
};

/// String manipulation tools.
#[derive(Debug, Parser)]
#[command(name = "stringutils")]
#[command(about = "String manipulation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Escape a set of characters
    Escape(EscapeArgs),
    /// Remove escape characters
    Unescape(UnescapeArgs),
    /// Split text into trimmed pieces
    Split(SplitArgs),
    /// Join pieces with a delimiter
    Join(JoinArgs),
    /// Parse a strict decimal integer
    Int(IntArgs),
    /// Extract one delimited component
    Component(ComponentArgs),
    /// Instantiate a ${name} template
    Template(TemplateArgs),
    /// Trim control characters and spaces from both ends
    Trim(TextArgs),
    /// Indent every CRLF line after the first
    Indent(IndentArgs),
    /// ASCII lowercase
    Lower(TextArgs),
    /// Fold case for case-insensitive comparison
    Normalize(TextArgs),
    /// Remove all whitespace
    Strip(TextArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the logger. `RUST_LOG` wins over the `--verbose` default.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Escape(args) => run_escape(args),
        Commands::Unescape(args) => run_unescape(args),
        Commands::Split(args) => run_split(args),
        Commands::Join(args) => run_join(args),
        Commands::Int(args) => run_int(args),
        Commands::Component(args) => run_component(args),
        Commands::Template(args) => run_template(args),
        Commands::Trim(args) => run_text(args, TextOp::Trim),
        Commands::Indent(args) => run_indent(args),
        Commands::Lower(args) => run_text(args, TextOp::Lower),
        Commands::Normalize(args) => run_text(args, TextOp::Normalize),
        Commands::Strip(args) => run_text(args, TextOp::Strip),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
