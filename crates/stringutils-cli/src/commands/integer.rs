//! Implementation of the `stringutils int` command.

use clap::Args;
use miette::{Report, Result};
use serde::Serialize;
use stringutils::{to_integer, IntegerError};

use super::read_input;
use crate::output::{print_json, IntegerDiagnostic};

/// Arguments for the int command.
#[derive(Debug, Args)]
pub struct IntArgs {
    /// Text to parse (`-` reads stdin)
    pub text: String,

    /// Trim the text before parsing
    #[arg(long)]
    pub trim: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the int command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum IntJson {
    Success { value: i64 },
    Failure { error: IntegerError },
}

/// Run the int command.
pub fn run_int(args: IntArgs) -> Result<i32> {
    let input = read_input(&args.text)?;
    let text = if args.trim {
        stringutils::trim(&input)
    } else {
        input.as_str()
    };

    match to_integer(text) {
        Ok(value) => {
            if args.json {
                print_json(&IntJson::Success { value })?;
            } else {
                println!("{}", value);
            }
            Ok(exitcode::OK)
        }
        Err(error) => {
            if args.json {
                print_json(&IntJson::Failure { error })?;
            } else {
                let diagnostic = IntegerDiagnostic::from_integer_error(text, &error);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            Ok(exitcode::DATAERR)
        }
    }
}
