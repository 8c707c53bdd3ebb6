//! Implementation of the `stringutils component` command.

use clap::Args;
use miette::Result;
use serde::Serialize;
use stringutils::parse_component;

use super::read_input;
use crate::output::print_json;

/// Arguments for the component command.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    /// Text to scan (`-` reads stdin)
    pub text: String,

    /// Byte offset where the component starts
    #[arg(short, long, default_value_t = 0)]
    pub begin: usize,

    /// Byte offset where scanning stops (defaults to the end of the text)
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the component command.
#[derive(Debug, Serialize)]
struct ComponentJson<'a> {
    component: &'a str,
    len: usize,
}

/// Run the component command.
pub fn run_component(args: ComponentArgs) -> Result<i32> {
    let text = read_input(&args.text)?;
    let end = args.end.unwrap_or(text.len());
    let component = parse_component(&text, args.begin, end);

    if args.json {
        print_json(&ComponentJson {
            component,
            len: component.len(),
        })?;
    } else {
        println!("{}", component);
    }
    Ok(exitcode::OK)
}
