//! Implementation of the `stringutils escape` and `unescape` commands.

use clap::Args;
use miette::Result;
use serde::Serialize;
use stringutils::Escaper;

use super::read_input;
use crate::output::print_json;

/// Arguments for the escape command.
#[derive(Debug, Args)]
pub struct EscapeArgs {
    /// Text to escape (`-` reads stdin)
    pub text: String,

    /// Characters to escape
    #[arg(short, long)]
    pub chars: String,

    /// Escape character
    #[arg(short, long, env = "STRINGUTILS_ESCAPE_CHAR", default_value_t = '\\')]
    pub escape_char: char,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the unescape command.
#[derive(Debug, Args)]
pub struct UnescapeArgs {
    /// Text to unescape (`-` reads stdin)
    pub text: String,

    /// Escape character
    #[arg(short, long, env = "STRINGUTILS_ESCAPE_CHAR", default_value_t = '\\')]
    pub escape_char: char,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for escape and unescape.
#[derive(Debug, Serialize)]
struct EscapeJson {
    escape_char: char,
    result: String,
}

/// Run the escape command.
pub fn run_escape(args: EscapeArgs) -> Result<i32> {
    let text = read_input(&args.text)?;
    let escaper = Escaper::new(args.escape_char, args.chars.chars());
    print_result(escaper.escape(&text), args.escape_char, args.json)
}

/// Run the unescape command.
pub fn run_unescape(args: UnescapeArgs) -> Result<i32> {
    let text = read_input(&args.text)?;
    let result = stringutils::unescape(&text, args.escape_char);
    print_result(result, args.escape_char, args.json)
}

fn print_result(result: String, escape_char: char, json: bool) -> Result<i32> {
    if json {
        print_json(&EscapeJson {
            escape_char,
            result,
        })?;
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
