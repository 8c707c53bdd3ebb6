//! Implementation of the `stringutils split` and `join` commands.

use clap::Args;
use miette::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use stringutils::{join, split};

use super::read_input;
use crate::output::print_json;
use crate::output::table::format_pieces_table;

/// Arguments for the split command.
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Text to split (`-` reads stdin)
    pub text: String,

    /// Delimiter: a single character or a substring
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Output as a table
    #[arg(long)]
    pub table: bool,
}

/// Arguments for the join command.
#[derive(Debug, Args)]
pub struct JoinArgs {
    /// Pieces to join, in order
    pub pieces: Vec<String>,

    /// Delimiter inserted between pieces
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for split.
#[derive(Debug, Serialize)]
struct SplitJson<'a> {
    delimiter: &'a str,
    pieces: &'a [String],
}

/// JSON output for join.
#[derive(Debug, Serialize)]
struct JoinJson {
    result: String,
}

/// Run the split command.
pub fn run_split(args: SplitArgs) -> Result<i32> {
    let text = read_input(&args.text)?;
    let pieces = split(&text, &args.delimiter);
    log::debug!("split produced {} pieces", pieces.len());

    if args.json {
        print_json(&SplitJson {
            delimiter: &args.delimiter,
            pieces: &pieces,
        })?;
    } else if args.table {
        println!("{}", format_pieces_table(&pieces));
    } else {
        for piece in &pieces {
            if piece.is_empty() {
                println!(
                    "{}",
                    "(empty)".if_supports_color(Stream::Stdout, |t| t.dimmed())
                );
            } else {
                println!("{}", piece);
            }
        }
    }
    Ok(exitcode::OK)
}

/// Run the join command.
pub fn run_join(args: JoinArgs) -> Result<i32> {
    let result = join(&args.pieces, &args.delimiter);
    if args.json {
        print_json(&JoinJson { result })?;
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
