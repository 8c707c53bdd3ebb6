//! CLI command implementations.

mod component;
mod escape;
mod integer;
mod split;
mod template;
mod text;

use std::io::{read_to_string, stdin};

use miette::{IntoDiagnostic, Result};

pub use component::{run_component, ComponentArgs};
pub use escape::{run_escape, run_unescape, EscapeArgs, UnescapeArgs};
pub use integer::{run_int, IntArgs};
pub use split::{run_join, run_split, JoinArgs, SplitArgs};
pub use template::{run_template, TemplateArgs};
pub use text::{run_indent, run_text, IndentArgs, TextArgs, TextOp};

/// Resolve a text argument, reading all of stdin when it is `-`.
fn read_input(text: &str) -> Result<String> {
    if text == "-" {
        read_to_string(stdin()).into_diagnostic()
    } else {
        Ok(text.to_string())
    }
}
